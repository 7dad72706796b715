//! Canvas-bound clamping and min/max size bounding.
//!
//! Every function here is total: out-of-range input is pulled back to the
//! nearest valid value, never rejected. When no canvas is attached
//! (`canvas == None`) extent-dependent clamps pass their input through.
//!
//! Bounds may cross (a shape larger than the canvas), so they are applied
//! with `min`/`max` rather than `f64::clamp`, which panics on `min > max`.

#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

use crate::geom::{Point, Rect, Size};

/// Minimum and maximum size of an item.
///
/// `minimum <= maximum` is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraints {
    pub minimum: Size,
    pub maximum: Size,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self { minimum: Size::new(0.0, 0.0), maximum: Size::new(f64::INFINITY, f64::INFINITY) }
    }
}

impl SizeConstraints {
    #[must_use]
    pub fn new(minimum: Size, maximum: Size) -> Self {
        Self { minimum, maximum }
    }
}

/// A size after bounding, and whether bounding had to change it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded {
    pub size: Size,
    pub violated: bool,
}

fn within(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

/// Clamp a top-left corner so a shape of `size` stays on the canvas.
///
/// A shape wider than the canvas is pinned to the left/top edge.
#[must_use]
pub fn clamp_position(top_left: Point, size: Size, canvas: Option<Size>) -> Point {
    let Some(c) = canvas else {
        return top_left;
    };
    Point::new(within(top_left.x, 0.0, c.width - size.width), within(top_left.y, 0.0, c.height - size.height))
}

/// Clamp a point-like position into `[0, extent]` on both axes.
#[must_use]
pub fn clamp_point(p: Point, canvas: Option<Size>) -> Point {
    let Some(c) = canvas else {
        return p;
    };
    Point::new(within(p.x, 0.0, c.width), within(p.y, 0.0, c.height))
}

/// Shrink `size` so a shape anchored at `origin` does not extend past the
/// canvas; negative sizes become zero.
#[must_use]
pub fn clamp_size_to_canvas(origin: Point, size: Size, canvas: Option<Size>) -> Size {
    let (max_w, max_h) = match canvas {
        Some(c) => (c.width - origin.x, c.height - origin.y),
        None => (f64::INFINITY, f64::INFINITY),
    };
    Size::new(size.width.min(max_w).max(0.0), size.height.min(max_h).max(0.0))
}

/// Clamp a whole rectangle onto the canvas: size first, then position.
///
/// Idempotent, and the identity on rectangles already on the canvas.
#[must_use]
pub fn clamp_rect(r: Rect, canvas: Option<Size>) -> Rect {
    let Some(c) = canvas else {
        return Rect::new(r.x, r.y, r.width.max(0.0), r.height.max(0.0));
    };
    let size = Size::new(within(r.width, 0.0, c.width), within(r.height, 0.0, c.height));
    let origin = clamp_position(r.top_left(), size, canvas);
    Rect::from_origin_size(origin, size)
}

/// Bound `size` into the constraints.
#[must_use]
pub fn bound_size(size: Size, constraints: &SizeConstraints) -> Bounded {
    let bounded = size.bounded_to(constraints.minimum, constraints.maximum);
    Bounded { size: bounded, violated: bounded != size }
}
