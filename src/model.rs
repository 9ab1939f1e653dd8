//! Core data models for item dragging.
//! Coordinates are CSS pixels; the scroll domain is a scalar offset and the
//! free-drag domain is an element's left/top pair.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Inclusive range on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `v` into the span. A degenerate span (`min > max`) always
    /// resolves to `min`.
    pub fn clamp(&self, v: f64) -> f64 {
        if self.min > self.max {
            return self.min;
        }
        v.max(self.min).min(self.max)
    }
}

/// Optional per-axis bounds for the 2D domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x: Option<Span>,
    pub y: Option<Span>,
}

impl AxisBounds {
    pub const fn both(x: Span, y: Span) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragDirection {
    /// Content moves against the pointer (drag right scrolls left).
    Inverse,
    /// Target follows the pointer.
    Direct,
}

/// A value a drag gesture can manipulate.
pub trait DragValue: Copy + Debug + PartialEq {
    type Bounds: Copy + Debug + PartialEq;

    /// Applies a pointer delta to `self` without clamping.
    fn displace(self, delta: Point, scale_factor: f64, direction: DragDirection) -> Self;

    fn clamp_to(self, bounds: &Self::Bounds) -> Self;
}

/// Scroll offset: only the horizontal component of the delta counts.
impl DragValue for f64 {
    type Bounds = Span;

    fn displace(self, delta: Point, scale_factor: f64, direction: DragDirection) -> Self {
        match direction {
            DragDirection::Inverse => self - delta.x * scale_factor,
            DragDirection::Direct => self + delta.x,
        }
    }

    fn clamp_to(self, bounds: &Span) -> Self {
        bounds.clamp(self)
    }
}

impl DragValue for Point {
    type Bounds = AxisBounds;

    fn displace(self, delta: Point, scale_factor: f64, direction: DragDirection) -> Self {
        match direction {
            DragDirection::Inverse => self - delta * scale_factor,
            DragDirection::Direct => self + delta,
        }
    }

    fn clamp_to(self, bounds: &AxisBounds) -> Self {
        Point::new(
            bounds.x.map_or(self.x, |s| s.clamp(self.x)),
            bounds.y.map_or(self.y, |s| s.clamp(self.y)),
        )
    }
}

/// Controller configuration. `scale_factor` only affects [`DragDirection::Inverse`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig<V: DragValue> {
    pub scale_factor: f64,
    pub direction: DragDirection,
    pub bounds: Option<V::Bounds>,
}

impl DragConfig<f64> {
    pub fn scroll(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            direction: DragDirection::Inverse,
            bounds: None,
        }
    }
}

impl DragConfig<Point> {
    pub fn free() -> Self {
        Self {
            scale_factor: 1.0,
            direction: DragDirection::Direct,
            bounds: None,
        }
    }
}

/// One tile in the demo strip and board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub label: String,
    pub hue: u16,
}

pub fn sample_items(count: u32) -> Vec<Item> {
    (0..count)
        .map(|id| Item {
            id,
            label: format!("Item {}", id + 1),
            hue: ((id * 37) % 360) as u16,
        })
        .collect()
}

/// Initial board slot for the `index`-th item: rows of `per_row` cells.
pub fn grid_slot(index: usize, per_row: usize, cell: Size, inset: f64) -> Point {
    let per_row = per_row.max(1);
    Point::new(
        inset + (index % per_row) as f64 * cell.width,
        inset + (index / per_row) as f64 * cell.height,
    )
}

/// Scroll range of a container: `[0, scroll_width - client_width]`.
pub fn scroll_extent_span(scroll_width: f64, client_width: f64) -> Span {
    Span::new(0.0, (scroll_width - client_width).max(0.0))
}

/// Positions an element of `element` size may take inside a container whose
/// scrollable extent is `extent`, keeping `inset` pixels from every edge.
/// A container too small for the element yields degenerate spans that
/// collapse to `inset`.
pub fn free_drag_bounds(extent: Size, element: Size, inset: f64) -> AxisBounds {
    AxisBounds::both(
        Span::new(inset, extent.width - element.width - inset),
        Span::new(inset, extent.height - element.height - inset),
    )
}

/// Reads a computed CSS length such as `"12.5px"`. Other units yield `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
