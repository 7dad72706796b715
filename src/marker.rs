//! Point marker: a zero-size item drawn as a cross, optionally labelled with
//! its coordinates.
//!
//! A marker has no resize handles; every hotspot moves it. Its geometry is a
//! zero-size rectangle at the marked point, clamped to `[0, extent]` rather
//! than `[0, extent - size]`.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use crate::action::Action;
use crate::clamp::clamp_point;
use crate::config::{ItemConfig, ItemFlags};
use crate::consts::MARKER_RADIUS_PX;
use crate::geom::{Point, Rect, Size, effective_scale};
use crate::item::{ShapeCore, ShapeItem};
use crate::label;
use crate::paint::PaintParams;

#[derive(Debug, Clone)]
pub struct MarkerItem {
    core: ShapeCore,
}

impl MarkerItem {
    #[must_use]
    pub fn new(point: Point) -> Self {
        Self::with_config(point, ItemFlags::marker_defaults(), ItemConfig::default())
    }

    #[must_use]
    pub fn with_config(point: Point, flags: ItemFlags, config: ItemConfig) -> Self {
        Self { core: ShapeCore::new(at(point), flags, config, false) }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.core.set_name(name);
        self
    }

    /// The marked point.
    #[must_use]
    pub fn point(&self) -> Point {
        self.core.geometry().top_left()
    }
}

fn at(p: Point) -> Rect {
    Rect::from_origin_size(p, Size::default())
}

impl ShapeItem for MarkerItem {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn move_to(&mut self, target: Point, scale_hint: f64) -> Vec<Action> {
        let mut p = clamp_point(target, self.core.canvas());
        if self.core.snaps_at(scale_hint) {
            p = p.floor();
        }
        self.core.replace_geometry(at(p))
    }

    fn set_position(&mut self, target: Point) -> Vec<Action> {
        self.core.replace_geometry(at(target))
    }

    /// Markers keep zero size; only the position is taken.
    fn set_geometry(&mut self, rect: Rect) -> Vec<Action> {
        let scale = self.core.scale();
        self.move_to(rect.top_left(), scale)
    }

    fn label_text(&self) -> Option<String> {
        let live = self.core.flags().display_real_coordinates.then(|| self.point());
        label::compose(self.core.name(), live)
    }

    fn paint_params(&self) -> PaintParams {
        let r = MARKER_RADIUS_PX / effective_scale(self.core.scale());
        let p = self.point();
        let outline = Rect::new(p.x - r, p.y - r, 2.0 * r, 2.0 * r);
        PaintParams::from_core(&self.core, outline, None, self.label())
    }
}
