// Mouse/touch normalization: every input becomes a phase plus an optional Point
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::model::{DragValue, Point};
use crate::state::controller::{DragController, DragSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Press,
    Move,
    Release,
    /// Implicit release: pointer left the target, window blurred, touch cancelled.
    Cancel,
}

/// Maps a DOM event name to the gesture phase it drives.
pub fn classify(event_type: &str) -> Option<GesturePhase> {
    match event_type {
        "mousedown" | "pointerdown" | "touchstart" => Some(GesturePhase::Press),
        "mousemove" | "pointermove" | "touchmove" => Some(GesturePhase::Move),
        "mouseup" | "pointerup" | "touchend" => Some(GesturePhase::Release),
        "mouseleave" | "pointerleave" | "pointercancel" | "touchcancel" | "blur" => {
            Some(GesturePhase::Cancel)
        }
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordSpace {
    /// Document coordinates (`pageX`/`pageY`).
    Page,
    /// Viewport coordinates (`clientX`/`clientY`).
    Client,
}

/// Picks the coordinates of the first touch; the rest are ignored.
pub fn first_touch<I>(touches: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    touches.into_iter().next()
}

/// Reads the pointer position from a mouse or touch event. Touch events with
/// no active touches (`touchend`) yield `None`.
pub fn sample(event: &Event, space: CoordSpace) -> Option<Point> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touches = touch_event.touches();
        let points = (0..touches.length()).filter_map(|i| touches.item(i)).map(|t| match space {
            CoordSpace::Page => Point::new(t.page_x() as f64, t.page_y() as f64),
            CoordSpace::Client => Point::new(t.client_x() as f64, t.client_y() as f64),
        });
        return first_touch(points);
    }
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(match space {
        CoordSpace::Page => Point::new(mouse.page_x() as f64, mouse.page_y() as f64),
        CoordSpace::Client => Point::new(mouse.client_x() as f64, mouse.client_y() as f64),
    })
}

/// What a phase did to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Started,
    /// A value was emitted to the sink.
    Moved,
    Ended,
    Ignored,
}

/// Feeds one normalized input into `controller`, emitting moves to `sink`.
/// `current` is read only on press, so callers can defer measuring the target.
pub fn drive<V, F, S>(
    controller: &mut DragController<V>,
    phase: GesturePhase,
    pointer: Option<Point>,
    current: F,
    sink: &mut S,
) -> Transition
where
    V: DragValue,
    F: FnOnce() -> V,
    S: DragSink<V>,
{
    match (phase, pointer) {
        (GesturePhase::Press, Some(p)) => {
            controller.start(p, current());
            Transition::Started
        }
        (GesturePhase::Move, Some(p)) => {
            if controller.move_and_emit(p, sink) {
                Transition::Moved
            } else {
                Transition::Ignored
            }
        }
        (GesturePhase::Release | GesturePhase::Cancel, _) if !controller.is_active() => {
            Transition::Ignored
        }
        (GesturePhase::Release, _) => {
            controller.end();
            Transition::Ended
        }
        (GesturePhase::Cancel, _) => {
            controller.cancel();
            Transition::Ended
        }
        (GesturePhase::Press | GesturePhase::Move, None) => Transition::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DragConfig;

    #[test]
    fn mouse_and_touch_names_share_phases() {
        assert_eq!(classify("mousedown"), classify("touchstart"));
        assert_eq!(classify("mousemove"), classify("touchmove"));
        assert_eq!(classify("mouseup"), classify("touchend"));
        assert_eq!(classify("pointerdown"), Some(GesturePhase::Press));
    }

    #[test]
    fn leave_blur_and_cancel_end_gestures() {
        for name in ["mouseleave", "pointerleave", "touchcancel", "blur"] {
            assert_eq!(classify(name), Some(GesturePhase::Cancel), "{name}");
        }
        assert_eq!(classify("dragstart"), None);
        assert_eq!(classify("click"), None);
    }

    #[test]
    fn first_touch_wins() {
        let touches = vec![Point::new(1.0, 2.0), Point::new(300.0, 400.0)];
        assert_eq!(first_touch(touches), Some(Point::new(1.0, 2.0)));
        assert_eq!(first_touch(Vec::<Point>::new()), None);
    }

    #[test]
    fn full_gesture_through_drive() {
        let mut c = DragController::new(DragConfig::scroll(3.0));
        let mut out: Vec<f64> = Vec::new();
        let mut reads = 0;
        let press = Some(Point::new(10.0, 0.0));
        let t = drive(
            &mut c,
            GesturePhase::Press,
            press,
            || {
                reads += 1;
                100.0
            },
            &mut out,
        );
        assert_eq!(t, Transition::Started);
        let t = drive(
            &mut c,
            GesturePhase::Move,
            Some(Point::new(20.0, 0.0)),
            || {
                reads += 1;
                0.0
            },
            &mut out,
        );
        assert_eq!(t, Transition::Moved);
        let t = drive(&mut c, GesturePhase::Release, None, || 0.0, &mut out);
        assert_eq!(t, Transition::Ended);
        assert_eq!(reads, 1);
        assert_eq!(out, vec![70.0]);
    }

    #[test]
    fn stray_inputs_are_ignored() {
        let mut c = DragController::new(DragConfig::free());
        let mut out: Vec<Point> = Vec::new();
        let stray = Some(Point::new(5.0, 5.0));
        let t = drive(&mut c, GesturePhase::Move, stray, Point::default, &mut out);
        assert_eq!(t, Transition::Ignored);
        let t = drive(&mut c, GesturePhase::Cancel, None, Point::default, &mut out);
        assert_eq!(t, Transition::Ignored);
        let t = drive(&mut c, GesturePhase::Press, None, Point::default, &mut out);
        assert_eq!(t, Transition::Ignored);
        assert!(!c.is_active());
        assert!(out.is_empty());
    }

    #[test]
    fn touch_and_mouse_drive_the_same_gesture() {
        // a touch press followed by mouse-named moves behaves like one gesture
        let mut c = DragController::new(DragConfig::free());
        let mut out: Vec<Point> = Vec::new();
        let press = classify("touchstart").expect("touchstart");
        let mv = classify("mousemove").expect("mousemove");
        let touch = first_touch([Point::new(10.0, 10.0), Point::new(90.0, 90.0)]);
        drive(&mut c, press, touch, || Point::new(50.0, 50.0), &mut out);
        drive(&mut c, mv, Some(Point::new(15.0, 40.0)), Point::default, &mut out);
        assert_eq!(out, vec![Point::new(55.0, 80.0)]);
    }

    #[test]
    fn cancel_mid_gesture_stops_tracking() {
        let mut c = DragController::new(DragConfig::free());
        let mut out: Vec<Point> = Vec::new();
        let origin = Some(Point::new(0.0, 0.0));
        drive(&mut c, GesturePhase::Press, origin, Point::default, &mut out);
        let t = drive(&mut c, GesturePhase::Cancel, None, Point::default, &mut out);
        assert_eq!(t, Transition::Ended);
        let late = Some(Point::new(9.0, 9.0));
        let t = drive(&mut c, GesturePhase::Move, late, Point::default, &mut out);
        assert_eq!(t, Transition::Ignored);
        assert!(out.is_empty());
    }
}
