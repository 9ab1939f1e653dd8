// Consumer options, read from a `data-drag` JSON attribute on the target element
use serde::{Deserialize, Serialize};

use crate::util::cwarn;

pub const CONFIG_ATTRIBUTE: &str = "data-drag";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollDragOptions {
    pub selector: String,
    /// Pointer-to-scroll multiplier.
    pub scale_factor: f64,
    /// Clamp to `[0, scrollWidth - clientWidth]` instead of leaving it to the browser.
    pub clamp_to_extent: bool,
    pub active_class: String,
    pub debug: bool,
}

impl Default for ScrollDragOptions {
    fn default() -> Self {
        Self {
            selector: ".items".to_string(),
            scale_factor: 2.0,
            clamp_to_extent: false,
            active_class: "active".to_string(),
            debug: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FreeDragOptions {
    pub selector: String,
    pub item_selector: String,
    /// Minimum distance kept between a dragged item and the container edges.
    pub inset: f64,
    pub lifted_shadow: String,
    pub lifted_z_index: i32,
    pub debug: bool,
}

impl Default for FreeDragOptions {
    fn default() -> Self {
        Self {
            selector: ".board".to_string(),
            item_selector: ".drag-item".to_string(),
            inset: 10.0,
            lifted_shadow: "0 12px 24px rgba(0,0,0,0.45)".to_string(),
            lifted_z_index: 1000,
            debug: false,
        }
    }
}

/// Parses `raw` over the defaults. Malformed input logs a warning and yields
/// the defaults.
pub fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(opts) => opts,
        Err(err) => {
            cwarn(&format!("ignoring malformed {CONFIG_ATTRIBUTE} config: {err}"));
            T::default()
        }
    }
}
