//! Hit-region classification: pointer position → zone, multipliers, cursor.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};
use crate::hotspot::HotspotRegions;

/// Which hotspot of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Interior: drags translate the item.
    Inner,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Zone {
    /// Classification order; the first containing region wins.
    pub const PRIORITY: [Zone; 9] = [
        Zone::TopLeft,
        Zone::BottomRight,
        Zone::BottomLeft,
        Zone::TopRight,
        Zone::Inner,
        Zone::Top,
        Zone::Bottom,
        Zone::Left,
        Zone::Right,
    ];

    #[must_use]
    pub fn multipliers(self) -> Multipliers {
        match self {
            Self::Inner => Multipliers::MOVE,
            Self::Top => Multipliers::new(0, 1, 0, -1),
            Self::Bottom => Multipliers::new(0, 0, 0, 1),
            Self::Left => Multipliers::new(1, 0, -1, 0),
            Self::Right => Multipliers::new(0, 0, 1, 0),
            Self::TopLeft => Multipliers::new(1, 1, -1, -1),
            Self::TopRight => Multipliers::new(0, 1, 1, -1),
            Self::BottomLeft => Multipliers::new(1, 0, -1, 1),
            Self::BottomRight => Multipliers::new(0, 0, 1, 1),
        }
    }

    #[must_use]
    pub fn cursor(self) -> CursorHint {
        match self {
            Self::Inner => CursorHint::Move,
            Self::Top | Self::Bottom => CursorHint::ResizeVertical,
            Self::Left | Self::Right => CursorHint::ResizeHorizontal,
            Self::TopLeft | Self::BottomRight => CursorHint::ResizeDiagonalDown,
            Self::TopRight | Self::BottomLeft => CursorHint::ResizeDiagonalUp,
        }
    }

    /// The region of `regions` this zone refers to.
    #[must_use]
    pub fn region(self, regions: &HotspotRegions) -> Rect {
        match self {
            Self::Inner => regions.inner,
            Self::Top => regions.top,
            Self::Bottom => regions.bottom,
            Self::Left => regions.left,
            Self::Right => regions.right,
            Self::TopLeft => regions.top_left,
            Self::TopRight => regions.top_right,
            Self::BottomLeft => regions.bottom_left,
            Self::BottomRight => regions.bottom_right,
        }
    }
}

/// Per-axis directional coefficients, each in `{-1, 0, 1}`.
///
/// `dx = 1` moves the left edge with the pointer, `dw = 1` moves the right
/// edge; `dx = 1, dw = -1` moves the left edge while the right edge stays
/// anchored. `dy`/`dh` mirror this vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Multipliers {
    pub dx: i8,
    pub dy: i8,
    pub dw: i8,
    pub dh: i8,
}

impl Multipliers {
    pub const NONE: Self = Self { dx: 0, dy: 0, dw: 0, dh: 0 };
    pub const MOVE: Self = Self { dx: 1, dy: 1, dw: 0, dh: 0 };
    /// Grow/shrink from the bottom-right corner.
    pub const RESIZE: Self = Self { dx: 0, dy: 0, dw: 1, dh: 1 };

    #[must_use]
    pub const fn new(dx: i8, dy: i8, dw: i8, dh: i8) -> Self {
        Self { dx, dy, dw, dh }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Position changes, size does not.
    #[must_use]
    pub fn is_translate(self) -> bool {
        (self.dx != 0 || self.dy != 0) && self.dw == 0 && self.dh == 0
    }

    /// Size changes, position does not.
    #[must_use]
    pub fn is_pure_resize(self) -> bool {
        self.dx == 0 && self.dy == 0 && (self.dw != 0 || self.dh != 0)
    }
}

/// Cursor shape suggested to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorHint {
    /// Host default arrow.
    #[default]
    Default,
    /// Four-way move.
    Move,
    /// North-south resize.
    ResizeVertical,
    /// East-west resize.
    ResizeHorizontal,
    /// Top-left ↔ bottom-right resize.
    ResizeDiagonalDown,
    /// Top-right ↔ bottom-left resize.
    ResizeDiagonalUp,
}

/// Result of classifying a pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub zone: Zone,
    pub multipliers: Multipliers,
    pub cursor: CursorHint,
    /// The hotspot rectangle that matched, in the coordinates of the regions.
    pub region: Rect,
}

impl HitRegion {
    #[must_use]
    pub fn new(zone: Zone, region: Rect) -> Self {
        Self { zone, multipliers: zone.multipliers(), cursor: zone.cursor(), region }
    }

    /// The same hit reinterpreted as a pure translate, for items without
    /// resize handles.
    #[must_use]
    pub fn as_translate(self) -> Self {
        Self { zone: Zone::Inner, multipliers: Multipliers::MOVE, cursor: CursorHint::Move, region: self.region }
    }
}

/// Classify `p` (item-local) against `regions`.
///
/// Returns `None` when the point is outside every hotspot.
#[must_use]
pub fn classify(p: Point, regions: &HotspotRegions) -> Option<HitRegion> {
    Zone::PRIORITY.into_iter().find_map(|zone| {
        let region = zone.region(regions);
        region.contains(p).then(|| HitRegion::new(zone, region))
    })
}
