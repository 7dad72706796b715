//! The shared item core and the [`ShapeItem`] trait.
//!
//! [`ShapeCore`] holds everything the concrete items have in common:
//! geometry, constraints, flags, hotspot cache, visual state, pointer
//! capture and nudge state. [`ShapeItem`] supplies the event handlers on top
//! of it; a concrete item only decides how it moves, how it labels itself
//! and how it is painted.
//!
//! All pointer positions are canvas coordinates. Handlers return the
//! [`Action`]s they caused instead of calling out.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use crate::action::{Action, KeyOutcome};
use crate::alert::BlinkStep;
use crate::clamp::{SizeConstraints, bound_size, clamp_rect};
use crate::config::{ItemConfig, ItemFlags};
use crate::consts::DISCRETE_PAINT_OFFSET;
use crate::drag::{self, Resolution};
use crate::geom::{Point, Rect, Size};
use crate::hit::{CursorHint, HitRegion, Multipliers, classify};
use crate::hotspot::{HotspotCache, HotspotRegions, Padding};
use crate::input::{Button, CaptureSession, InputState, Key, Modifiers};
use crate::label::{self, Label};
use crate::nudge::{KeyMap, NudgeAccumulator};
use crate::paint::PaintParams;
use crate::scheduler::TimerToken;
use crate::visual::VisualState;

/// Unique identifier of an item.
pub type ItemId = Uuid;

// =============================================================================
// ShapeCore
// =============================================================================

/// State shared by every shape item.
#[derive(Debug, Clone)]
pub struct ShapeCore {
    id: ItemId,
    name: String,
    geometry: Rect,
    constraints: SizeConstraints,
    flags: ItemFlags,
    config: ItemConfig,
    canvas: Option<Size>,
    scale: f64,
    resizable: bool,
    hotspots: HotspotCache,
    visual: VisualState,
    input: InputState,
    nudge: NudgeAccumulator,
    cursor: CursorHint,
}

impl ShapeCore {
    /// A detached core (no canvas, scale 1). Items without resize handles
    /// treat every hotspot as a move handle.
    #[must_use]
    pub fn new(geometry: Rect, flags: ItemFlags, config: ItemConfig, resizable: bool) -> Self {
        let id = Uuid::new_v4();
        let nudge = NudgeAccumulator::new(KeyMap::arrows(config.nudge_step));
        Self {
            id,
            name: String::new(),
            geometry,
            constraints: SizeConstraints::default(),
            flags,
            config,
            canvas: None,
            scale: 1.0,
            resizable,
            hotspots: HotspotCache::new(),
            visual: VisualState::new(id),
            input: InputState::Idle,
            nudge,
            cursor: CursorHint::Default,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    #[must_use]
    pub fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    #[must_use]
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    #[must_use]
    pub fn config(&self) -> &ItemConfig {
        &self.config
    }

    /// Canvas extent, if the item is attached to one.
    #[must_use]
    pub fn canvas(&self) -> Option<Size> {
        self.canvas
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    #[must_use]
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn nudge(&self) -> &NudgeAccumulator {
        &self.nudge
    }

    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Whether positions requested at `scale_hint` snap to integers.
    #[must_use]
    pub fn snaps_at(&self, scale_hint: f64) -> bool {
        self.flags.discrete_geometry || scale_hint < self.config.discrete_scale_threshold
    }

    /// Half-pixel offset for snapped geometry, zero otherwise.
    #[must_use]
    pub fn paint_offset(&self) -> Point {
        if self.snaps_at(self.scale) {
            Point::new(DISCRETE_PAINT_OFFSET, DISCRETE_PAINT_OFFSET)
        } else {
            Point::default()
        }
    }

    // --- Hotspots ---

    /// Hotspot regions in item-local coordinates, derived on demand.
    pub fn hotspots(&mut self) -> HotspotRegions {
        let scale = self.scale;
        let size = self.geometry.size();
        let padding = Padding::new(self.config.outer_pad, self.config.inner_pad);
        let fill = self.fill_area();
        self.hotspots.get_or_derive(scale, || HotspotRegions::derive(size, padding, scale, fill))
    }

    /// Hotspot regions in canvas coordinates, for debug overlays.
    pub fn hotspots_in_canvas(&mut self) -> HotspotRegions {
        let origin = self.geometry.top_left();
        self.hotspots().translated(origin)
    }

    /// Everything the item reacts to and repaints, in canvas coordinates.
    pub fn bounding_rect(&mut self) -> Rect {
        self.hotspots_in_canvas().bounding
    }

    /// Classify a canvas point against the hotspots.
    pub fn hit_test(&mut self, p: Point) -> Option<HitRegion> {
        let local = p - self.geometry.top_left();
        let regions = self.hotspots();
        let hit = classify(local, &regions)?;
        Some(if self.resizable { hit } else { hit.as_translate() })
    }

    fn fill_area(&self) -> Option<Rect> {
        if !self.flags.fill_scene || self.visual.is_selected() {
            return None;
        }
        let canvas = self.canvas?;
        Some(Rect::new(-self.geometry.x, -self.geometry.y, canvas.width, canvas.height))
    }

    // --- Mutation helpers ---

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Store `rect` as-is and report what changed.
    pub(crate) fn replace_geometry(&mut self, rect: Rect) -> Vec<Action> {
        if rect == self.geometry {
            return Vec::new();
        }
        let moved = rect.top_left() != self.geometry.top_left();
        self.geometry = rect;
        self.hotspots.invalidate();

        let id = self.id;
        let mut actions = Vec::with_capacity(3);
        if moved {
            actions.push(Action::PositionChanged { id, position: rect.top_left() });
        }
        actions.push(Action::GeometryChanged { id, geometry: rect });
        actions.push(Action::RenderNeeded { id });
        actions
    }

    /// Apply a drag/resize resolution, starting the alert on a size violation.
    pub(crate) fn apply_resolution(&mut self, resolution: Resolution) -> Vec<Action> {
        let mut actions = self.replace_geometry(resolution.rect);
        if resolution.violated {
            actions.extend(self.trigger_alert());
        }
        actions
    }

    fn trigger_alert(&mut self) -> Vec<Action> {
        let Some(token) = self.visual.alert_mut().trigger() else {
            return Vec::new();
        };
        debug!(id = %self.id, "size bound hit, alert started");
        vec![
            Action::ScheduleTimer { token, delay: self.blink_interval() },
            Action::RenderNeeded { id: self.id },
        ]
    }

    fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.config.blink_interval_ms)
    }

    fn set_cursor(&mut self, cursor: CursorHint) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor { id: self.id, cursor })
    }

    fn set_highlighted(&mut self, highlighted: bool) -> Option<Action> {
        self.visual.set_highlighted(highlighted).then_some(Action::RenderNeeded { id: self.id })
    }

    /// Idle pointer feedback: highlight while over a hotspot, cursor per zone.
    fn hover(&mut self, p: Point) -> Vec<Action> {
        let hit = self.hit_test(p);
        let cursor = hit.map_or(CursorHint::Default, |h| h.cursor);
        let mut actions = Vec::new();
        actions.extend(self.set_highlighted(hit.is_some()));
        actions.extend(self.set_cursor(cursor));
        actions
    }

    fn leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        actions.extend(self.set_highlighted(false));
        actions.extend(self.set_cursor(CursorHint::Default));
        actions
    }

    fn on_timer(&mut self, token: TimerToken) -> Vec<Action> {
        match self.visual.alert_mut().fire(token) {
            BlinkStep::Stale => Vec::new(),
            BlinkStep::Rearm(next) => vec![
                Action::ScheduleTimer { token: next, delay: self.blink_interval() },
                Action::RenderNeeded { id: self.id },
            ],
            BlinkStep::Settled => {
                debug!(id = %self.id, "alert settled");
                vec![Action::RenderNeeded { id: self.id }]
            }
        }
    }

    fn teardown(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.nudge.reset();
        self.visual.alert_mut().cancel().map(Action::CancelTimer).into_iter().collect()
    }
}

// =============================================================================
// ShapeItem
// =============================================================================

/// A directly-manipulable item.
///
/// Implementors provide the core accessors, movement, label text and paint
/// parameters. Everything else has a default built on [`ShapeCore`].
pub trait ShapeItem {
    fn core(&self) -> &ShapeCore;
    fn core_mut(&mut self) -> &mut ShapeCore;

    /// Move the item's anchor to `target`, clamped into the canvas and
    /// snapped to integers when the core snaps at `scale_hint`. No-op when
    /// the result equals the current position.
    fn move_to(&mut self, target: Point, scale_hint: f64) -> Vec<Action>;

    /// Move without clamping or snapping.
    fn set_position(&mut self, target: Point) -> Vec<Action>;

    /// Label text, before the `display_label` flag is considered.
    fn label_text(&self) -> Option<String>;

    fn paint_params(&self) -> PaintParams;

    // --- Queries ---

    fn id(&self) -> ItemId {
        self.core().id()
    }

    fn geometry(&self) -> Rect {
        self.core().geometry()
    }

    fn is_selected(&self) -> bool {
        self.core().visual().is_selected()
    }

    fn label(&self) -> Option<Label> {
        let core = self.core();
        if !core.flags().display_label {
            return None;
        }
        let text = self.label_text()?;
        let anchor = label::anchor(core.geometry(), &text, core.scale(), core.canvas());
        Some(Label { text, anchor })
    }

    fn hit_test(&mut self, p: Point) -> Option<HitRegion> {
        self.core_mut().hit_test(p)
    }

    // --- Mutations ---

    /// Bound the size to the constraints, then clamp onto the canvas.
    fn set_geometry(&mut self, rect: Rect) -> Vec<Action> {
        let core = self.core();
        let size = bound_size(rect.size(), core.constraints()).size;
        let clamped = clamp_rect(rect.with_size(size), core.canvas());
        self.core_mut().replace_geometry(clamped)
    }

    fn set_size(&mut self, size: Size) -> Vec<Action> {
        let rect = self.geometry().with_size(size);
        self.set_geometry(rect)
    }

    fn set_minimum_size(&mut self, size: Size) -> Vec<Action> {
        self.core_mut().constraints.minimum = size;
        let rect = self.geometry();
        self.set_geometry(rect)
    }

    fn set_maximum_size(&mut self, size: Size) -> Vec<Action> {
        self.core_mut().constraints.maximum = size;
        let rect = self.geometry();
        self.set_geometry(rect)
    }

    fn set_selected(&mut self, selected: bool) -> Vec<Action> {
        let core = self.core_mut();
        if !core.visual.set_selected(selected) {
            return Vec::new();
        }
        core.hotspots.invalidate();
        let id = core.id;
        vec![Action::SelectionChanged { id, selected }, Action::RenderNeeded { id }]
    }

    /// Set both hotspot pads, in screen pixels.
    fn set_mouse_pad(&mut self, pad: f64) {
        let core = self.core_mut();
        core.config.outer_pad = pad;
        core.config.inner_pad = pad;
        core.hotspots.invalidate();
    }

    fn set_flags(&mut self, flags: ItemFlags) -> Vec<Action> {
        let core = self.core_mut();
        if core.flags == flags {
            return Vec::new();
        }
        core.flags = flags;
        core.hotspots.invalidate();
        vec![Action::RenderNeeded { id: core.id }]
    }

    fn set_key_map(&mut self, keymap: KeyMap) {
        self.core_mut().nudge.set_keymap(keymap);
    }

    /// Attach to (or detach from) a canvas and pull the geometry back onto it.
    fn set_canvas(&mut self, canvas: Option<Size>) -> Vec<Action> {
        let core = self.core_mut();
        core.canvas = canvas;
        core.hotspots.invalidate();
        let rect = self.geometry();
        self.set_geometry(rect)
    }

    /// Update the view scale. Non-positive or non-finite scales are ignored.
    fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.core_mut().scale = scale;
        }
    }

    // --- Pointer ---

    fn on_pointer_enter(&mut self, p: Point) -> Vec<Action> {
        self.on_pointer_move(p)
    }

    /// Drag while captured, hover feedback otherwise.
    fn on_pointer_move(&mut self, p: Point) -> Vec<Action> {
        match self.core().input().session().copied() {
            Some(session) => drag_to(self, session, p),
            None => self.core_mut().hover(p),
        }
    }

    fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.core().input().is_captured() {
            return Vec::new();
        }
        self.core_mut().leave()
    }

    /// Press inside the item: optionally select, optionally start a capture.
    fn on_pointer_press(&mut self, p: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let Some(hit) = self.hit_test(p) else {
            return Vec::new();
        };
        let id = self.id();
        let flags = self.core().flags();
        let mut actions = Vec::new();
        if button == Button::Primary {
            if flags.select_on_click {
                actions.extend(self.set_selected(true));
                let extend = modifiers.shift || modifiers.ctrl || modifiers.meta;
                actions.push(Action::SelectionRequested { id, extend });
            }
            if flags.accepts_mouse_capture {
                let core = self.core_mut();
                core.input = InputState::Captured(CaptureSession::new(p, core.geometry, hit));
                debug!(%id, zone = ?hit.zone, "capture started");
            }
        }
        actions.push(Action::Pressed { id, button });
        actions
    }

    /// End a capture, or report a plain click-release over the item.
    fn on_pointer_release(&mut self, p: Point, button: Button) -> Vec<Action> {
        let id = self.id();
        let core = self.core_mut();
        if core.input.is_captured() {
            if button != Button::Primary {
                return Vec::new();
            }
            core.input = InputState::Idle;
            debug!(%id, "capture ended");
            let mut actions = vec![Action::Released { id, button }];
            actions.extend(core.hover(p));
            return actions;
        }
        if core.hit_test(p).is_some() { vec![Action::Released { id, button }] } else { Vec::new() }
    }

    // --- Keyboard ---

    /// Nudge by the held-key vector; Shift resizes instead of moving.
    fn on_key_press(&mut self, key: &Key, modifiers: Modifiers) -> KeyOutcome {
        let core = self.core_mut();
        if !core.flags.accepts_keyboard || !core.visual.is_selected() {
            return KeyOutcome::ignored();
        }
        let Some(vector) = core.nudge.press(key) else {
            return KeyOutcome::ignored();
        };
        let snapshot = core.geometry;
        let actions = if modifiers.shift && core.resizable {
            let resolution = drag::resolve(snapshot, Multipliers::RESIZE, vector, core.canvas, &core.constraints);
            core.apply_resolution(resolution)
        } else {
            let scale = core.scale;
            self.move_to(snapshot.top_left() + vector, scale)
        };
        KeyOutcome::handled(actions)
    }

    /// Release always updates the held keys, selected or not.
    fn on_key_release(&mut self, key: &Key) -> KeyOutcome {
        let core = self.core_mut();
        let mapped = core.nudge.release(key);
        if mapped && core.flags.accepts_keyboard && core.visual.is_selected() {
            KeyOutcome::handled(Vec::new())
        } else {
            KeyOutcome::ignored()
        }
    }

    // --- Timers / lifecycle ---

    /// Deliver an alert timer. Stale tokens are ignored.
    fn on_timer(&mut self, token: TimerToken) -> Vec<Action> {
        self.core_mut().on_timer(token)
    }

    /// Drop capture and held keys and cancel any pending timer.
    fn teardown(&mut self) -> Vec<Action> {
        self.core_mut().teardown()
    }
}

/// Recompute geometry for a pointer at `pointer` during `session`.
fn drag_to<I: ShapeItem + ?Sized>(item: &mut I, session: CaptureSession, pointer: Point) -> Vec<Action> {
    let delta = session.delta(pointer);
    let m = session.multipliers;
    let core = item.core();
    let resolution = drag::resolve(session.snapshot, m, delta, core.canvas, &core.constraints);
    if m.is_translate() {
        // The item decides snapping and its own anchor clamp.
        let scale = core.scale();
        return item.move_to(resolution.rect.top_left(), scale);
    }
    item.core_mut().apply_resolution(resolution)
}
