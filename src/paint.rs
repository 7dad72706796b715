//! Parameters the host needs to draw an item. Drawing itself is the host's job.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};
use crate::item::ShapeCore;
use crate::label::Label;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintParams {
    /// Shape outline in canvas coordinates, before `offset`.
    pub outline: Rect,
    pub pen_color: String,
    pub pen_width: f64,
    /// `pen_width` is in screen pixels and must not scale with zoom.
    pub cosmetic: bool,
    pub fill: Option<String>,
    /// Added to every painted coordinate; a half pixel for snapped geometry.
    pub offset: Point,
    pub label: Option<Label>,
    pub label_color: String,
}

impl PaintParams {
    /// Pen, offset and label colour from the core's state; outline, fill and
    /// label from the concrete item.
    #[must_use]
    pub fn from_core(core: &ShapeCore, outline: Rect, fill: Option<String>, label: Option<Label>) -> Self {
        let config = core.config();
        let pen_width = if core.visual().is_highlighted() { config.highlight_pen_width } else { config.pen_width };
        Self {
            outline,
            pen_color: core.visual().indicator().color(&config.palette).to_owned(),
            pen_width,
            cosmetic: true,
            fill,
            offset: core.paint_offset(),
            label,
            label_color: config.palette.label.clone(),
        }
    }
}
