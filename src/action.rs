//! Side effects requested by item event handlers.
//!
//! Handlers never call back into the host. They mutate the item and return
//! a list of actions; the scene (or any other host) forwards timer requests
//! to its scheduler and hands every action to its observers.

use std::time::Duration;

use crate::geom::{Point, Rect};
use crate::hit::CursorHint;
use crate::input::Button;
use crate::item::ItemId;
use crate::scheduler::TimerToken;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The item's top-left corner moved.
    PositionChanged { id: ItemId, position: Point },
    /// Any part of the geometry changed.
    GeometryChanged { id: ItemId, geometry: Rect },
    /// The item's own selected flag flipped.
    SelectionChanged { id: ItemId, selected: bool },
    /// The item was clicked and wants to be selected. `extend` is set when a
    /// modifier asks to keep the current selection.
    SelectionRequested { id: ItemId, extend: bool },
    Pressed { id: ItemId, button: Button },
    Released { id: ItemId, button: Button },
    SetCursor { id: ItemId, cursor: CursorHint },
    ScheduleTimer { token: TimerToken, delay: Duration },
    CancelTimer(TimerToken),
    /// The item's paint parameters changed.
    RenderNeeded { id: ItemId },
}

/// Result of a key event: whether the item consumed the key, plus actions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    pub handled: bool,
    pub actions: Vec<Action>,
}

impl KeyOutcome {
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn handled(actions: Vec<Action>) -> Self {
        Self { handled: true, actions }
    }
}
