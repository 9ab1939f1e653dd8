// Drag-to-scroll for a horizontally scrolling container
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

use super::listeners::Listeners;
use super::{SetupError, query_html, window};
use crate::config::{CONFIG_ATTRIBUTE, ScrollDragOptions, parse_or_default};
use crate::model::{DragConfig, Point, scroll_extent_span};
use crate::state::{
    CoordSpace, DragController, DragPhase, DragSink, GesturePhase, Transition, classify, drive,
    sample,
};
use crate::util::{cwarn, dlog};

const CONTAINER_EVENTS: &[&str] = &[
    "mousedown",
    "mousemove",
    "mouseup",
    "mouseleave",
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
    "dragstart",
    "selectstart",
];

struct ScrollState {
    container: HtmlElement,
    controller: RefCell<DragController<f64>>,
    options: ScrollDragOptions,
}

impl ScrollState {
    fn handle(&self, event: &Event) {
        let kind = event.type_();
        match kind.as_str() {
            // native image/link dragging would steal the gesture
            "dragstart" => {
                event.prevent_default();
                return;
            }
            "selectstart" => {
                if self.controller.borrow().is_active() {
                    event.prevent_default();
                }
                return;
            }
            _ => {}
        }
        let Some(phase) = classify(&kind) else {
            return;
        };
        if phase == GesturePhase::Press && !is_primary_press(event) {
            return;
        }
        let left = self.container.offset_left() as f64;
        let pointer = sample(event, CoordSpace::Page).map(|p| Point::new(p.x - left, 0.0));

        let mut controller = self.controller.borrow_mut();
        if phase == GesturePhase::Press && self.options.clamp_to_extent {
            controller.set_bounds(Some(scroll_extent_span(
                self.container.scroll_width() as f64,
                self.container.client_width() as f64,
            )));
        }
        if phase == GesturePhase::Move && controller.is_active() {
            event.prevent_default();
        }
        let container = &self.container;
        let transition = drive(
            &mut *controller,
            phase,
            pointer,
            || container.scroll_left() as f64,
            &mut ScrollOffset(container),
        );
        drop(controller);

        match transition {
            Transition::Started => {
                self.set_dragging(true);
                dlog(self.options.debug, || {
                    format!("scroll drag start ({kind}) at scrollLeft={}", container.scroll_left())
                });
            }
            Transition::Ended => {
                self.set_dragging(false);
                dlog(self.options.debug, || {
                    format!("scroll drag end ({kind}) at scrollLeft={}", container.scroll_left())
                });
            }
            Transition::Moved | Transition::Ignored => {}
        }
    }

    fn set_dragging(&self, dragging: bool) {
        let classes = self.container.class_list();
        let style = self.container.style();
        if dragging {
            let _ = classes.add_1(&self.options.active_class);
            let _ = style.set_property("cursor", "grabbing");
        } else {
            let _ = classes.remove_1(&self.options.active_class);
            let _ = style.set_property("cursor", "grab");
        }
    }
}

/// Writes drag output to the container's `scrollLeft`.
struct ScrollOffset<'a>(&'a HtmlElement);

impl DragSink<f64> for ScrollOffset<'_> {
    fn emit(&mut self, offset: f64) {
        self.0.set_scroll_left(offset.round() as i32);
    }
}

/// Secondary mouse buttons never start a drag; touches always do.
fn is_primary_press(event: &Event) -> bool {
    event.dyn_ref::<MouseEvent>().map_or(true, |m| m.button() == 0)
}

/// Drag-to-scroll wired to one container. Dropping it detaches every listener.
pub struct ScrollDrag {
    state: Rc<ScrollState>,
    _listeners: Listeners,
}

impl ScrollDrag {
    pub fn attach(container: HtmlElement, options: ScrollDragOptions) -> Result<Self, SetupError> {
        let window = window()?;
        let state = Rc::new(ScrollState {
            container: container.clone(),
            controller: RefCell::new(DragController::new(DragConfig::scroll(options.scale_factor))),
            options,
        });
        let handler = {
            let state = state.clone();
            move |e: Event| state.handle(&e)
        };
        let mut listeners = Listeners::new();
        listeners.on_each(&container, CONTAINER_EVENTS, handler.clone())?;
        listeners.on(&window, "blur", handler)?;
        let _ = container.style().set_property("cursor", "grab");
        dlog(state.options.debug, || {
            format!(
                "scroll drag attached to {} ({} listeners, x{})",
                state.options.selector,
                listeners.len(),
                state.options.scale_factor
            )
        });
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Finds the container by selector and reads its `data-drag` options;
    /// `scale_factor` wins over the attribute when given.
    pub fn attach_selector(selector: &str, scale_factor: Option<f64>) -> Result<Self, SetupError> {
        let container = query_html(selector)?;
        let mut options: ScrollDragOptions =
            parse_or_default(container.get_attribute(CONFIG_ATTRIBUTE).as_deref());
        options.selector = selector.to_string();
        if let Some(k) = scale_factor {
            options.scale_factor = k;
        }
        Self::attach(container, options)
    }

    /// Like `attach`, but a missing window, document or container only logs.
    pub fn try_attach(container: Option<HtmlElement>, options: ScrollDragOptions) -> Option<Self> {
        let result = container
            .ok_or_else(|| SetupError::MissingTarget(options.selector.clone()))
            .and_then(|el| Self::attach(el, options));
        match result {
            Ok(drag) => Some(drag),
            Err(err) => {
                cwarn(&format!("scroll drag disabled: {err}"));
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.controller.borrow().phase() == DragPhase::Dragging
    }

    /// Changes the multiplier in place; a drag in progress keeps its anchor.
    pub fn set_scale_factor(&self, scale_factor: f64) {
        let mut controller = self.state.controller.borrow_mut();
        let previous = controller.config().scale_factor;
        controller.set_scale_factor(scale_factor);
        dlog(self.state.options.debug, || {
            format!("scroll drag scale x{previous} -> x{scale_factor}")
        });
    }
}
