//! Item labels: text composition and placement beside the item.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LABEL_CHAR_WIDTH_PX, LABEL_LINE_HEIGHT_PX, LABEL_OFFSET_PX};
use crate::geom::{Point, Rect, Size, effective_scale};

/// Label text and the canvas rectangle it is drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub anchor: Rect,
}

/// `"(x;y)"` with the shortest float formatting, so `12.0` prints as `12`.
#[must_use]
pub fn coordinates(p: Point) -> String {
    format!("({};{})", p.x, p.y)
}

/// Label text for an item called `name`, optionally followed by its live
/// coordinates. `None` when there is nothing to show.
#[must_use]
pub fn compose(name: &str, live: Option<Point>) -> Option<String> {
    match (name.is_empty(), live) {
        (true, None) => None,
        (false, None) => Some(name.to_owned()),
        (true, Some(p)) => Some(coordinates(p)),
        (false, Some(p)) => Some(format!("{name} {}", coordinates(p))),
    }
}

/// Where to draw `text` for an item occupying `item`.
///
/// The label sits below-right of the item and flips to the other side on
/// any axis where it would leave the canvas. Metrics are screen pixels.
#[must_use]
pub fn anchor(item: Rect, text: &str, scale: f64, canvas: Option<Size>) -> Rect {
    let s = effective_scale(scale);
    let gap = LABEL_OFFSET_PX / s;
    #[allow(clippy::cast_precision_loss)]
    let width = text.chars().count() as f64 * LABEL_CHAR_WIDTH_PX / s;
    let height = LABEL_LINE_HEIGHT_PX / s;

    let mut x = item.right() + gap;
    let mut y = item.bottom() + gap;
    if let Some(c) = canvas {
        if x + width > c.width {
            x = item.left() - gap - width;
        }
        if y + height > c.height {
            y = item.top() - gap - height;
        }
    }
    Rect::new(x, y, width, height)
}
