//! Rectangle item with eight resize handles and a move handle.

#[cfg(test)]
#[path = "rect_item_test.rs"]
mod rect_item_test;

use crate::action::Action;
use crate::clamp::clamp_position;
use crate::config::{ItemConfig, ItemFlags};
use crate::geom::{Point, Rect};
use crate::item::{ShapeCore, ShapeItem};
use crate::label;
use crate::paint::PaintParams;

#[derive(Debug, Clone)]
pub struct RectItem {
    core: ShapeCore,
}

impl RectItem {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self::with_config(rect, ItemFlags::rect_defaults(), ItemConfig::default())
    }

    #[must_use]
    pub fn with_config(rect: Rect, flags: ItemFlags, config: ItemConfig) -> Self {
        Self { core: ShapeCore::new(rect, flags, config, true) }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.core.set_name(name);
        self
    }
}

impl ShapeItem for RectItem {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn move_to(&mut self, target: Point, scale_hint: f64) -> Vec<Action> {
        let current = self.core.geometry();
        let mut origin = clamp_position(target, current.size(), self.core.canvas());
        if self.core.snaps_at(scale_hint) {
            origin = origin.floor();
        }
        self.core.replace_geometry(current.with_top_left(origin))
    }

    fn set_position(&mut self, target: Point) -> Vec<Action> {
        let rect = self.core.geometry().with_top_left(target);
        self.core.replace_geometry(rect)
    }

    fn label_text(&self) -> Option<String> {
        let live = self.core.flags().display_real_coordinates.then(|| self.core.geometry().top_left());
        label::compose(self.core.name(), live)
    }

    fn paint_params(&self) -> PaintParams {
        let fill = Some(self.core.config().palette.fill.clone());
        PaintParams::from_core(&self.core, self.core.geometry(), fill, self.label())
    }
}
