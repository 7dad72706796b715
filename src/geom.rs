//! Plain geometry value types: points, sizes and axis-aligned rectangles.
//!
//! All coordinates are canvas-local `f64`. Rectangles follow the screen
//! convention: `y` grows downwards and `(x, y)` is the top-left corner.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// The view scale to compute with: non-positive or non-finite scales count as 1.
#[must_use]
pub fn effective_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
}

/// A point (or displacement) in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise floor.
    #[must_use]
    pub fn floor(self) -> Self {
        Self { x: self.x.floor(), y: self.y.floor() }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise clamp into `[min, max]`.
    ///
    /// `min <= max` is not checked; when violated, `max` wins, matching
    /// `f64::min(f64::max(v, lo), hi)`.
    #[must_use]
    pub fn bounded_to(self, min: Self, max: Self) -> Self {
        Self {
            width: self.width.max(min.width).min(max.width),
            height: self.height.max(min.height).min(max.height),
        }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning two corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self { x: left, y: top, width: (a.x - b.x).abs(), height: (a.y - b.y).abs() }
    }

    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    ///
    /// Adjacent hotspot regions share edges, so half-open tests keep them
    /// disjoint.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        !self.is_empty() && p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Closed containment of another rectangle (shared edges count as inside).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// True when the interiors overlap. Touching edges do not count.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    #[must_use]
    pub fn translated(&self, d: Point) -> Self {
        Self { x: self.x + d.x, y: self.y + d.y, ..*self }
    }

    /// Move each edge independently, like growing/shrinking a frame.
    #[must_use]
    pub fn adjusted(&self, dl: f64, dt: f64, dr: f64, db: f64) -> Self {
        Self {
            x: self.x + dl,
            y: self.y + dt,
            width: self.width - dl + dr,
            height: self.height - dt + db,
        }
    }

    #[must_use]
    pub fn with_top_left(&self, p: Point) -> Self {
        Self { x: p.x, y: p.y, ..*self }
    }

    #[must_use]
    pub fn with_size(&self, s: Size) -> Self {
        Self { width: s.width, height: s.height, ..*self }
    }
}
