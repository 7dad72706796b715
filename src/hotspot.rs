//! Hotspot regions: the padded sub-rectangles used for directional hit-testing.
//!
//! Regions are expressed in item-local coordinates (origin at the item's
//! top-left corner). Pads are given in screen pixels and divided by the view
//! scale, so a hotspot band is equally thick at every zoom level.
//!
//! ```text
//!  outer ┌────┬──────────────┬────┐
//!        │ TL │     top      │ TR │
//!        ├────┼──────────────┼────┤
//!        │left│    inner     │right
//!        ├────┼──────────────┼────┤
//!        │ BL │    bottom    │ BR │
//!        └────┴──────────────┴────┘
//! ```
//!
//! The outline of the shape runs through the middle of the edge bands.

#[cfg(test)]
#[path = "hotspot_test.rs"]
mod hotspot_test;

use serde::{Deserialize, Serialize};

use crate::consts::{HOTSPOT_COLLAPSE_RATIO, SCALE_EPSILON};
use crate::geom::{Point, Rect, Size, effective_scale};

/// Hotspot band thickness, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Band outside the outline.
    pub outer: f64,
    /// Band inside the outline.
    pub inner: f64,
}

impl Padding {
    #[must_use]
    pub fn new(outer: f64, inner: f64) -> Self {
        Self { outer, inner }
    }

    /// Pads converted to canvas units for the given view scale.
    ///
    /// Non-positive or non-finite scales are treated as 1.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        let s = effective_scale(scale);
        Self { outer: self.outer / s, inner: self.inner / s }
    }
}

/// The derived hit regions of one item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HotspotRegions {
    /// Everything the item reacts to; also the rectangle it must repaint.
    pub bounding: Rect,
    /// Outline grown by the outer pad.
    pub outer: Rect,
    /// Outline shrunk by the inner pad; the move handle.
    pub inner: Rect,
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_left: Rect,
    pub bottom_right: Rect,
}

impl HotspotRegions {
    /// Derive regions for a shape of `size` at view `scale`.
    ///
    /// `fill_area` is the whole canvas in item-local coordinates; when given,
    /// the item becomes a single drag handle covering it and no resize
    /// handles exist.
    #[must_use]
    pub fn derive(size: Size, padding: Padding, scale: f64, fill_area: Option<Rect>) -> Self {
        if let Some(area) = fill_area {
            return Self { bounding: area, outer: area, inner: area, ..Self::default() };
        }

        let Padding { mut outer, mut inner } = padding.scaled(scale);
        if size.width < HOTSPOT_COLLAPSE_RATIO * inner || size.height < HOTSPOT_COLLAPSE_RATIO * inner {
            outer = inner;
            inner = 0.0;
        }

        let shape = Rect::new(0.0, 0.0, size.width.max(0.0), size.height.max(0.0));
        let o = shape.adjusted(-outer, -outer, outer, outer);
        let i = shape.adjusted(inner, inner, -inner, -inner);

        Self {
            bounding: o,
            outer: o,
            inner: i,
            top: Rect::new(i.left(), o.top(), i.width, i.top() - o.top()),
            bottom: Rect::new(i.left(), i.bottom(), i.width, o.bottom() - i.bottom()),
            left: Rect::new(o.left(), i.top(), i.left() - o.left(), i.height),
            right: Rect::new(i.right(), i.top(), o.right() - i.right(), i.height),
            top_left: Rect::from_corners(o.top_left(), i.top_left()),
            top_right: Rect::from_corners(Point::new(o.right(), o.top()), Point::new(i.right(), i.top())),
            bottom_left: Rect::from_corners(Point::new(o.left(), o.bottom()), Point::new(i.left(), i.bottom())),
            bottom_right: Rect::from_corners(Point::new(o.right(), o.bottom()), Point::new(i.right(), i.bottom())),
        }
    }

    /// The same regions moved by `offset`, e.g. into canvas coordinates.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            bounding: self.bounding.translated(offset),
            outer: self.outer.translated(offset),
            inner: self.inner.translated(offset),
            top: self.top.translated(offset),
            bottom: self.bottom.translated(offset),
            left: self.left.translated(offset),
            right: self.right.translated(offset),
            top_left: self.top_left.translated(offset),
            top_right: self.top_right.translated(offset),
            bottom_left: self.bottom_left.translated(offset),
            bottom_right: self.bottom_right.translated(offset),
        }
    }
}

/// Regions memoized per view scale.
///
/// The cache is keyed by scale only; geometry, pad, selection and
/// fill-scene changes must call [`HotspotCache::invalidate`].
#[derive(Debug, Clone, Default)]
pub struct HotspotCache {
    valid: bool,
    scale: f64,
    value: HotspotRegions,
}

impl HotspotCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Cached regions, if they were derived at (approximately) `scale`.
    #[must_use]
    pub fn get(&self, scale: f64) -> Option<&HotspotRegions> {
        (self.valid && (self.scale - scale).abs() < SCALE_EPSILON).then_some(&self.value)
    }

    /// Cached regions, re-deriving them with `derive` on a miss.
    pub fn get_or_derive(&mut self, scale: f64, derive: impl FnOnce() -> HotspotRegions) -> HotspotRegions {
        if self.get(scale).is_none() {
            self.value = derive();
            self.scale = scale;
            self.valid = true;
        }
        self.value
    }
}
