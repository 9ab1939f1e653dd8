// Pointer-drag controller shared by the scroll-drag and free-drag consumers
use crate::model::{DragConfig, DragValue, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Anchor captured at gesture start plus the last emitted value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState<V> {
    pub anchor_pointer: Point,
    pub anchor_value: V,
    pub current_value: V,
}

/// Receives values produced while dragging.
pub trait DragSink<V> {
    fn emit(&mut self, value: V);
}

impl<V> DragSink<V> for Vec<V> {
    fn emit(&mut self, value: V) {
        self.push(value);
    }
}

#[derive(Debug, Clone)]
pub struct DragController<V: DragValue> {
    config: DragConfig<V>,
    gesture: Option<GestureState<V>>,
}

impl<V: DragValue> DragController<V> {
    pub fn new(config: DragConfig<V>) -> Self {
        Self {
            config,
            gesture: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        if self.gesture.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn gesture(&self) -> Option<&GestureState<V>> {
        self.gesture.as_ref()
    }

    pub fn config(&self) -> &DragConfig<V> {
        &self.config
    }

    /// Takes effect on the next `move_to`, including mid-gesture.
    pub fn set_bounds(&mut self, bounds: Option<V::Bounds>) {
        self.config.bounds = bounds;
    }

    /// Like `set_bounds`, applies from the next `move_to`; the anchor is kept.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.config.scale_factor = scale_factor;
    }

    /// Anchors a new gesture. Calling this while already dragging re-anchors.
    pub fn start(&mut self, pointer: Point, current_value: V) {
        self.gesture = Some(GestureState {
            anchor_pointer: pointer,
            anchor_value: current_value,
            current_value,
        });
    }

    /// Returns the constrained value for `pointer`, or `None` while idle.
    pub fn move_to(&mut self, pointer: Point) -> Option<V> {
        let config = self.config;
        let gesture = self.gesture.as_mut()?;
        let delta = pointer - gesture.anchor_pointer;
        let raw = gesture
            .anchor_value
            .displace(delta, config.scale_factor, config.direction);
        let value = match &config.bounds {
            Some(bounds) => raw.clamp_to(bounds),
            None => raw,
        };
        gesture.current_value = value;
        Some(value)
    }

    /// Like `move_to`, forwarding the value to `sink`. Returns whether a value
    /// was emitted.
    pub fn move_and_emit<S: DragSink<V>>(&mut self, pointer: Point, sink: &mut S) -> bool {
        match self.move_to(pointer) {
            Some(value) => {
                sink.emit(value);
                true
            }
            None => false,
        }
    }

    pub fn end(&mut self) {
        self.gesture = None;
    }

    /// Implicit end (pointer left, window blurred, touch cancelled).
    pub fn cancel(&mut self) {
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxisBounds, DragDirection, Span};

    fn scroll(k: f64) -> DragController<f64> {
        DragController::new(DragConfig::scroll(k))
    }

    #[test]
    fn starts_idle_and_ignores_moves() {
        let mut c = scroll(2.0);
        assert_eq!(c.phase(), DragPhase::Idle);
        assert_eq!(c.move_to(Point::new(10.0, 0.0)), None);
        assert_eq!(c.phase(), DragPhase::Idle);
    }

    #[test]
    fn scroll_scenario_scale_two() {
        let mut c = scroll(2.0);
        c.start(Point::new(100.0, 0.0), 0.0);
        assert_eq!(c.move_to(Point::new(80.0, 0.0)), Some(40.0));
    }

    #[test]
    fn inverse_law_holds_for_several_scales() {
        for k in [1.0, 2.0, 3.0, 0.5] {
            for (p0, p1, anchor) in [(0.0, 50.0, 200.0), (300.0, 120.0, 10.0), (5.0, 5.0, 7.0)] {
                let mut c = scroll(k);
                c.start(Point::new(p0, 0.0), anchor);
                assert_eq!(c.move_to(Point::new(p1, 0.0)), Some(anchor - (p1 - p0) * k));
            }
        }
    }

    #[test]
    fn zero_scale_holds_anchor_value() {
        let mut c = scroll(0.0);
        c.start(Point::new(10.0, 0.0), 55.0);
        assert_eq!(c.move_to(Point::new(400.0, 0.0)), Some(55.0));
        assert_eq!(c.move_to(Point::new(-90.0, 0.0)), Some(55.0));
    }

    #[test]
    fn free_drag_scenario_within_bounds() {
        let mut c = DragController::new(DragConfig::free());
        c.set_bounds(Some(AxisBounds::both(
            Span::new(0.0, 500.0),
            Span::new(0.0, 500.0),
        )));
        c.start(Point::new(10.0, 10.0), Point::new(50.0, 50.0));
        assert_eq!(c.move_to(Point::new(15.0, 40.0)), Some(Point::new(55.0, 80.0)));
    }

    #[test]
    fn direct_law_ignores_scale_factor() {
        let mut c = DragController::new(DragConfig {
            scale_factor: 3.0,
            direction: DragDirection::Direct,
            bounds: None,
        });
        c.start(Point::new(-4.0, 2.0), Point::new(1.0, 1.0));
        assert_eq!(c.move_to(Point::new(6.0, -8.0)), Some(Point::new(11.0, -9.0)));
    }

    #[test]
    fn output_is_clamped() {
        let mut c = scroll(1.0);
        c.set_bounds(Some(Span::new(0.0, 100.0)));
        c.start(Point::new(0.0, 0.0), 50.0);
        assert_eq!(c.move_to(Point::new(-500.0, 0.0)), Some(100.0));
        assert_eq!(c.move_to(Point::new(500.0, 0.0)), Some(0.0));
    }

    #[test]
    fn degenerate_bounds_collapse_to_min() {
        let mut c = scroll(1.0);
        c.set_bounds(Some(Span::new(80.0, 20.0)));
        c.start(Point::new(0.0, 0.0), 50.0);
        assert_eq!(c.move_to(Point::new(-10.0, 0.0)), Some(80.0));
    }

    #[test]
    fn end_is_idempotent() {
        let mut c = scroll(2.0);
        c.start(Point::new(0.0, 0.0), 0.0);
        c.end();
        c.end();
        assert_eq!(c.phase(), DragPhase::Idle);
        assert!(c.gesture().is_none());
        assert_eq!(c.move_to(Point::new(30.0, 0.0)), None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut c = scroll(2.0);
        c.start(Point::new(0.0, 0.0), 0.0);
        c.cancel();
        assert!(!c.is_active());
    }

    #[test]
    fn restart_reanchors() {
        let mut c = scroll(1.0);
        c.start(Point::new(100.0, 0.0), 0.0);
        assert_eq!(c.move_to(Point::new(90.0, 0.0)), Some(10.0));
        c.start(Point::new(200.0, 0.0), 500.0);
        assert_eq!(c.phase(), DragPhase::Dragging);
        assert_eq!(c.move_to(Point::new(190.0, 0.0)), Some(510.0));
    }

    #[test]
    fn anchor_is_not_moved_by_moves() {
        let mut c = scroll(1.0);
        c.start(Point::new(100.0, 0.0), 20.0);
        c.move_to(Point::new(40.0, 0.0));
        c.move_to(Point::new(70.0, 0.0));
        let g = c.gesture().copied();
        assert_eq!(
            g,
            Some(GestureState {
                anchor_pointer: Point::new(100.0, 0.0),
                anchor_value: 20.0,
                current_value: 50.0,
            })
        );
    }

    #[test]
    fn move_and_emit_reaches_sink_only_while_dragging() {
        let mut c = scroll(2.0);
        let mut out: Vec<f64> = Vec::new();
        assert!(!c.move_and_emit(Point::new(1.0, 0.0), &mut out));
        c.start(Point::new(100.0, 0.0), 0.0);
        assert!(c.move_and_emit(Point::new(80.0, 0.0), &mut out));
        assert!(c.move_and_emit(Point::new(110.0, 0.0), &mut out));
        c.end();
        assert!(!c.move_and_emit(Point::new(0.0, 0.0), &mut out));
        assert_eq!(out, vec![40.0, -20.0]);
    }

    #[test]
    fn scale_factor_can_change_between_moves() {
        let mut c = scroll(2.0);
        assert_eq!(c.config().scale_factor, 2.0);
        c.start(Point::new(100.0, 0.0), 0.0);
        assert_eq!(c.move_to(Point::new(80.0, 0.0)), Some(40.0));
        c.set_scale_factor(3.0);
        assert_eq!(c.config().scale_factor, 3.0);
        assert_eq!(c.config().direction, DragDirection::Inverse);
        // measured from the original anchor, not the last value
        assert_eq!(c.move_to(Point::new(80.0, 0.0)), Some(60.0));
        assert!(c.is_active());
    }

    #[test]
    fn config_reflects_bounds() {
        let mut c = scroll(1.0);
        assert_eq!(c.config().bounds, None);
        c.set_bounds(Some(Span::new(0.0, 10.0)));
        assert_eq!(c.config().bounds, Some(Span::new(0.0, 10.0)));
    }
}
