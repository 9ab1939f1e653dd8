// Free-form repositioning of absolutely positioned items inside a container
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, Node};

use super::listeners::Listeners;
use super::{SetupError, query_html, window};
use crate::config::{CONFIG_ATTRIBUTE, FreeDragOptions, parse_or_default};
use crate::model::{DragConfig, Point, Size, free_drag_bounds, parse_px};
use crate::state::{
    CoordSpace, DragController, DragPhase, DragSink, GesturePhase, Transition, classify, drive,
    sample,
};
use crate::util::{cwarn, dlog};

const PRESS_EVENTS: &[&str] = &["mousedown", "touchstart"];
const WINDOW_EVENTS: &[&str] = &[
    "mousemove",
    "touchmove",
    "mouseup",
    "touchend",
    "touchcancel",
    "blur",
];

/// The item being dragged and the inline styles it had before it was lifted.
struct Lifted {
    element: HtmlElement,
    box_shadow: String,
    z_index: String,
}

impl Lifted {
    fn lift(element: HtmlElement, options: &FreeDragOptions) -> Self {
        let style = element.style();
        let box_shadow = style.get_property_value("box-shadow").unwrap_or_default();
        let z_index = style.get_property_value("z-index").unwrap_or_default();
        let _ = style.set_property("box-shadow", &options.lifted_shadow);
        let _ = style.set_property("z-index", &options.lifted_z_index.to_string());
        let _ = style.set_property("cursor", "grabbing");
        Self {
            element,
            box_shadow,
            z_index,
        }
    }

    fn place(&self, at: Point) {
        let style = self.element.style();
        let _ = style.set_property("left", &format!("{}px", at.x));
        let _ = style.set_property("top", &format!("{}px", at.y));
    }

    /// Puts back the inline values captured by `lift`.
    fn drop_down(self) {
        let style = self.element.style();
        for (name, original) in [("box-shadow", &self.box_shadow), ("z-index", &self.z_index)] {
            if original.is_empty() {
                let _ = style.remove_property(name);
            } else {
                let _ = style.set_property(name, original);
            }
        }
        let _ = style.set_property("cursor", "grab");
    }
}

/// The item's `left`/`top`. `offsetLeft`/`offsetTop` measure the border box,
/// so the computed margin is taken off again.
fn position_of(item: &HtmlElement) -> Point {
    let offset = Point::new(item.offset_left() as f64, item.offset_top() as f64);
    let margin = window()
        .ok()
        .and_then(|w| w.get_computed_style(item).ok().flatten())
        .map(|style| {
            let px = |name: &str| {
                style
                    .get_property_value(name)
                    .ok()
                    .and_then(|v| parse_px(&v))
                    .unwrap_or(0.0)
            };
            Point::new(px("margin-left"), px("margin-top"))
        })
        .unwrap_or_default();
    offset - margin
}

/// Moves the lifted item, if any.
impl DragSink<Point> for Option<Lifted> {
    fn emit(&mut self, at: Point) {
        if let Some(lifted) = self {
            lifted.place(at);
        }
    }
}

struct FreeState {
    container: HtmlElement,
    controller: RefCell<DragController<Point>>,
    lifted: RefCell<Option<Lifted>>,
    options: FreeDragOptions,
}

impl FreeState {
    fn item_under(&self, event: &Event) -> Option<HtmlElement> {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        let item = target.closest(&self.options.item_selector).ok()??;
        let node: &Node = &item;
        if !self.container.contains(Some(node)) {
            return None;
        }
        item.dyn_into::<HtmlElement>().ok()
    }

    fn press(&self, event: &Event) {
        if event.dyn_ref::<MouseEvent>().is_some_and(|m| m.button() != 0) {
            return;
        }
        let Some(item) = self.item_under(event) else {
            return;
        };
        let Some(pointer) = sample(event, CoordSpace::Client) else {
            return;
        };
        // keeps the browser from selecting text or scrolling under the finger
        event.prevent_default();

        let extent = Size {
            width: self.container.scroll_width() as f64,
            height: self.container.scroll_height() as f64,
        };
        let size = Size {
            width: item.offset_width() as f64,
            height: item.offset_height() as f64,
        };
        let origin = position_of(&item);

        let mut controller = self.controller.borrow_mut();
        controller.set_bounds(Some(free_drag_bounds(extent, size, self.options.inset)));
        drive(
            &mut *controller,
            GesturePhase::Press,
            Some(pointer),
            || origin,
            &mut *self.lifted.borrow_mut(),
        );
        drop(controller);

        // a second press without a release re-anchors on the new item
        if let Some(previous) = self.lifted.borrow_mut().take() {
            previous.drop_down();
        }
        dlog(self.options.debug, || {
            format!("free drag start at ({}, {})", origin.x, origin.y)
        });
        *self.lifted.borrow_mut() = Some(Lifted::lift(item, &self.options));
    }

    fn handle_window(&self, event: &Event) {
        let Some(phase) = classify(&event.type_()) else {
            return;
        };
        if phase == GesturePhase::Press {
            return;
        }
        let pointer = sample(event, CoordSpace::Client);
        let mut controller = self.controller.borrow_mut();
        if phase == GesturePhase::Move && controller.is_active() {
            event.prevent_default();
        }
        let transition = drive(
            &mut *controller,
            phase,
            pointer,
            Point::default,
            &mut *self.lifted.borrow_mut(),
        );
        drop(controller);

        match transition {
            Transition::Ended => {
                if let Some(lifted) = self.lifted.borrow_mut().take() {
                    dlog(self.options.debug, || {
                        format!(
                            "free drag end at ({}, {})",
                            lifted.element.offset_left(),
                            lifted.element.offset_top()
                        )
                    });
                    lifted.drop_down();
                }
            }
            Transition::Started | Transition::Moved | Transition::Ignored => {}
        }
    }
}

/// Free-drag wired to one container. Dropping it detaches every listener.
pub struct FreeDrag {
    state: Rc<FreeState>,
    _listeners: Listeners,
}

impl FreeDrag {
    pub fn attach(container: HtmlElement, options: FreeDragOptions) -> Result<Self, SetupError> {
        let window = window()?;
        let state = Rc::new(FreeState {
            container: container.clone(),
            controller: RefCell::new(DragController::new(DragConfig::free())),
            lifted: RefCell::new(None),
            options,
        });
        let mut listeners = Listeners::new();
        let press = {
            let state = state.clone();
            move |e: Event| state.press(&e)
        };
        listeners.on_each(&container, PRESS_EVENTS, press)?;
        let track = {
            let state = state.clone();
            move |e: Event| state.handle_window(&e)
        };
        listeners.on_each(&window, WINDOW_EVENTS, track)?;
        dlog(state.options.debug, || {
            format!(
                "free drag attached to {} ({} listeners)",
                state.options.selector,
                listeners.len()
            )
        });
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    pub fn attach_selector(selector: &str) -> Result<Self, SetupError> {
        let container = query_html(selector)?;
        let mut options: FreeDragOptions =
            parse_or_default(container.get_attribute(CONFIG_ATTRIBUTE).as_deref());
        options.selector = selector.to_string();
        Self::attach(container, options)
    }

    /// Like `attach`, but a missing window, document or container only logs.
    pub fn try_attach(container: Option<HtmlElement>, options: FreeDragOptions) -> Option<Self> {
        let result = container
            .ok_or_else(|| SetupError::MissingTarget(options.selector.clone()))
            .and_then(|el| Self::attach(el, options));
        match result {
            Ok(drag) => Some(drag),
            Err(err) => {
                cwarn(&format!("free drag disabled: {err}"));
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.controller.borrow().phase() == DragPhase::Dragging
    }
}
