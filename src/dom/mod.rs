//! DOM consumers of the drag controller plus the explicit entry points a page
//! or test harness calls to wire them up.

pub mod error;
pub mod free_drag;
pub mod listeners;
pub mod scroll_drag;

pub use error::SetupError;
pub use free_drag::FreeDrag;
pub use scroll_drag::ScrollDrag;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{FreeDragOptions, ScrollDragOptions};
use crate::util::cwarn;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

pub fn query_html(selector: &str) -> Result<HtmlElement, SetupError> {
    document()?
        .query_selector(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| SetupError::MissingTarget(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::NotHtmlElement(selector.to_string()))
}

#[wasm_bindgen]
pub struct ScrollDragHandle {
    inner: Option<ScrollDrag>,
}

#[wasm_bindgen]
impl ScrollDragHandle {
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.inner.as_ref().is_some_and(ScrollDrag::is_dragging)
    }

    /// Removes every listener; later calls do nothing.
    pub fn detach(&mut self) {
        self.inner = None;
    }
}

#[wasm_bindgen]
pub struct FreeDragHandle {
    inner: Option<FreeDrag>,
}

#[wasm_bindgen]
impl FreeDragHandle {
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.inner.as_ref().is_some_and(FreeDrag::is_dragging)
    }

    pub fn detach(&mut self) {
        self.inner = None;
    }
}

/// Wires drag-to-scroll onto `selector` (default `.items`). `scale_factor`
/// overrides the element's `data-drag` options. Returns `undefined` when the
/// container is missing.
#[wasm_bindgen(js_name = initScrollDrag)]
pub fn init_scroll_drag(
    selector: Option<String>,
    scale_factor: Option<f64>,
) -> Option<ScrollDragHandle> {
    let selector = selector.unwrap_or_else(|| ScrollDragOptions::default().selector);
    let attached = ScrollDrag::attach_selector(&selector, scale_factor);
    match attached {
        Ok(drag) => Some(ScrollDragHandle { inner: Some(drag) }),
        Err(err) => {
            cwarn(&format!("initScrollDrag: {err}"));
            None
        }
    }
}

/// Wires free-drag onto `selector` (default `.board`).
#[wasm_bindgen(js_name = initFreeDrag)]
pub fn init_free_drag(selector: Option<String>) -> Option<FreeDragHandle> {
    let selector = selector.unwrap_or_else(|| FreeDragOptions::default().selector);
    match FreeDrag::attach_selector(&selector) {
        Ok(drag) => Some(FreeDragHandle { inner: Some(drag) }),
        Err(err) => {
            cwarn(&format!("initFreeDrag: {err}"));
            None
        }
    }
}
