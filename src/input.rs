//! Input model: buttons, keys, modifiers and the pointer capture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-press and
//! pointer-release. A capture carries everything needed to recompute the
//! geometry from scratch on every move: the press point, the geometry at
//! press time, and the multipliers of the hotspot that was grabbed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Rect};
use crate::hit::{HitRegion, Multipliers};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the host reports it (e.g. `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held; nudges resize instead of move.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Context of an active pointer capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSession {
    /// Canvas-space pointer position at press time.
    pub origin: Point,
    /// Item geometry at press time.
    pub snapshot: Rect,
    /// Multipliers of the grabbed hotspot.
    pub multipliers: Multipliers,
    /// The grabbed hotspot.
    pub hit: HitRegion,
}

impl CaptureSession {
    #[must_use]
    pub fn new(origin: Point, snapshot: Rect, hit: HitRegion) -> Self {
        Self { origin, snapshot, multipliers: hit.multipliers, hit }
    }

    /// Pointer displacement since press.
    #[must_use]
    pub fn delta(&self, pointer: Point) -> Point {
        pointer - self.origin
    }
}

/// Pointer state machine: `Idle → Captured → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No button held; moves only update hover feedback.
    #[default]
    Idle,
    /// Primary button held on one of the item's hotspots.
    Captured(CaptureSession),
}

impl InputState {
    #[must_use]
    pub fn is_captured(&self) -> bool {
        matches!(self, Self::Captured(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&CaptureSession> {
        match self {
            Self::Captured(session) => Some(session),
            Self::Idle => None,
        }
    }
}
