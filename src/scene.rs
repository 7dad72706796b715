//! Scene: owns the items, routes input to them and carries out their actions.
//!
//! The scene keeps a bottom-to-top stacking order, parent links, the item
//! holding the pointer capture and the hovered item. Every [`Action`] an
//! item returns is executed (timer requests go to the scheduler, selection
//! requests clear the other items' selection) and then handed to the
//! observers.
//!
//! ```text
//!   host event ──▶ Scene ──▶ item handler ──▶ Vec<Action> ──▶ dispatch
//!                                                              │
//!                               Scheduler ◀── timers ──────────┤
//!                               observers ◀── every action ────┘
//! ```

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::action::Action;
use crate::error::SceneError;
use crate::geom::{Point, Size};
use crate::hotspot::HotspotRegions;
use crate::input::{Button, Key, Modifiers};
use crate::item::{ItemId, ShapeItem};
use crate::observer::{Observers, SubscriptionId};
use crate::paint::PaintParams;
use crate::scheduler::{ManualScheduler, Scheduler, TimerToken};
use crate::zorder::{self, Layer};

pub struct Scene<S: Scheduler> {
    items: HashMap<ItemId, Box<dyn ShapeItem>>,
    parents: HashMap<ItemId, ItemId>,
    /// Bottom to top.
    order: Vec<ItemId>,
    grabber: Option<ItemId>,
    hovered: Option<ItemId>,
    canvas: Option<Size>,
    scale: f64,
    observers: Observers,
    scheduler: S,
}

impl<S: Scheduler> Scene<S> {
    /// An empty scene with no canvas attached.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self {
            items: HashMap::new(),
            parents: HashMap::new(),
            order: Vec::new(),
            grabber: None,
            hovered: None,
            canvas: None,
            scale: 1.0,
            observers: Observers::new(),
            scheduler,
        }
    }

    #[must_use]
    pub fn with_canvas(scheduler: S, canvas: Size) -> Self {
        let mut scene = Self::new(scheduler);
        scene.canvas = Some(canvas);
        scene
    }

    // --- Queries ---

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn canvas_size(&self) -> Option<Size> {
        self.canvas
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&dyn ShapeItem> {
        self.items.get(&id).map(Box::as_ref)
    }

    #[must_use]
    pub fn parent(&self, id: ItemId) -> Option<ItemId> {
        self.parents.get(&id).copied()
    }

    /// Item ids, bottom to top.
    #[must_use]
    pub fn stacking_order(&self) -> &[ItemId] {
        &self.order
    }

    /// Selected item ids, bottom to top.
    #[must_use]
    pub fn selection(&self) -> Vec<ItemId> {
        self.order.iter().copied().filter(|id| self.items.get(id).is_some_and(|item| item.is_selected())).collect()
    }

    #[must_use]
    pub fn grabber(&self) -> Option<ItemId> {
        self.grabber
    }

    /// Paint parameters of every item, bottom to top.
    #[must_use]
    pub fn paint_list(&self) -> Vec<(ItemId, PaintParams)> {
        self.order.iter().filter_map(|id| self.items.get(id).map(|item| (*id, item.paint_params()))).collect()
    }

    /// Hotspot regions of `id` in canvas coordinates.
    pub fn hotspots(&mut self, id: ItemId) -> Result<HotspotRegions, SceneError> {
        let item = self.items.get_mut(&id).ok_or(SceneError::UnknownItem(id))?;
        Ok(item.core_mut().hotspots_in_canvas())
    }

    /// Top-most item with a hotspot under `p`.
    pub fn item_at(&mut self, p: Point) -> Option<ItemId> {
        let items = &mut self.items;
        self.order.iter().rev().copied().find(|id| items.get_mut(id).is_some_and(|item| item.hit_test(p).is_some()))
    }

    // --- Membership ---

    /// Add `item` on top of the stack, attached to the scene's canvas and scale.
    pub fn insert(&mut self, item: impl ShapeItem + 'static) -> ItemId {
        let mut item: Box<dyn ShapeItem> = Box::new(item);
        let id = item.id();
        item.set_scale(self.scale);
        let actions = item.set_canvas(self.canvas);
        self.items.insert(id, item);
        self.order.push(id);
        info!(%id, count = self.items.len(), "item added");
        self.dispatch(actions);
        id
    }

    pub fn insert_child(&mut self, item: impl ShapeItem + 'static, parent: ItemId) -> Result<ItemId, SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::UnknownParent(parent));
        }
        let id = self.insert(item);
        self.parents.insert(id, parent);
        Ok(id)
    }

    pub fn set_parent(&mut self, id: ItemId, parent: Option<ItemId>) -> Result<(), SceneError> {
        if !self.contains(id) {
            return Err(SceneError::UnknownItem(id));
        }
        let Some(parent) = parent else {
            self.parents.remove(&id);
            return Ok(());
        };
        if !self.contains(parent) {
            return Err(SceneError::UnknownParent(parent));
        }
        let mut cursor = Some(parent);
        while let Some(ancestor) = cursor {
            if ancestor == id {
                return Err(SceneError::CyclicParent(id));
            }
            cursor = self.parents.get(&ancestor).copied();
        }
        self.parents.insert(id, parent);
        Ok(())
    }

    /// Remove `id`, cancelling its pending timers. Its children move up to
    /// its parent.
    pub fn remove(&mut self, id: ItemId) -> Result<Box<dyn ShapeItem>, SceneError> {
        let mut item = self.items.remove(&id).ok_or(SceneError::UnknownItem(id))?;
        self.order.retain(|other| *other != id);
        match self.parents.remove(&id) {
            Some(grandparent) => {
                for parent in self.parents.values_mut().filter(|p| **p == id) {
                    *parent = grandparent;
                }
            }
            None => self.parents.retain(|_, p| *p != id),
        }
        if self.grabber == Some(id) {
            self.grabber = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        let actions = item.teardown();
        info!(%id, count = self.items.len(), "item removed");
        self.dispatch(actions);
        Ok(item)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Action) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- Item mutation ---

    /// Run `f` on item `id` and carry out the actions it returns.
    pub fn update(
        &mut self,
        id: ItemId,
        f: impl FnOnce(&mut dyn ShapeItem) -> Vec<Action>,
    ) -> Result<(), SceneError> {
        let item = self.items.get_mut(&id).ok_or(SceneError::UnknownItem(id))?;
        let actions = f(&mut **item);
        self.dispatch(actions);
        Ok(())
    }

    /// Select `id` and clear every other item's selection.
    pub fn select_only(&mut self, id: ItemId) -> Result<(), SceneError> {
        if !self.contains(id) {
            return Err(SceneError::UnknownItem(id));
        }
        let mut actions = self.deselect_except(Some(id));
        if let Some(item) = self.items.get_mut(&id) {
            actions.extend(item.set_selected(true));
        }
        self.dispatch(actions);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        let actions = self.deselect_except(None);
        self.dispatch(actions);
    }

    /// Attach a new canvas extent (or detach) and re-clamp every item.
    pub fn set_canvas_size(&mut self, canvas: Option<Size>) {
        self.canvas = canvas;
        let mut actions = Vec::new();
        for id in &self.order {
            if let Some(item) = self.items.get_mut(id) {
                actions.extend(item.set_canvas(canvas));
            }
        }
        debug!(?canvas, "canvas resized");
        self.dispatch(actions);
    }

    /// Update the view scale of every item. Non-positive or non-finite
    /// scales are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !(scale.is_finite() && scale > 0.0) {
            return;
        }
        self.scale = scale;
        for item in self.items.values_mut() {
            item.set_scale(scale);
        }
    }

    // --- Pointer ---

    /// Press at `p`; returns the item that received it.
    pub fn pointer_press(&mut self, p: Point, button: Button, modifiers: Modifiers) -> Option<ItemId> {
        let id = self.item_at(p)?;
        let item = self.items.get_mut(&id)?;
        let actions = item.on_pointer_press(p, button, modifiers);
        if item.core().input().is_captured() {
            self.grabber = Some(id);
        }
        self.dispatch(actions);
        Some(id)
    }

    /// Move to `p`: drags the grabber, or updates hover feedback.
    pub fn pointer_move(&mut self, p: Point) {
        if let Some(id) = self.grabber {
            let actions = self.items.get_mut(&id).map(|item| item.on_pointer_move(p)).unwrap_or_default();
            self.dispatch(actions);
            return;
        }

        let target = self.item_at(p);
        let mut actions = Vec::new();
        if target != self.hovered {
            if let Some(item) = self.hovered.and_then(|old| self.items.get_mut(&old)) {
                actions.extend(item.on_pointer_leave());
            }
            if let Some(item) = target.and_then(|new| self.items.get_mut(&new)) {
                actions.extend(item.on_pointer_enter(p));
            }
            self.hovered = target;
        } else if let Some(item) = target.and_then(|id| self.items.get_mut(&id)) {
            actions.extend(item.on_pointer_move(p));
        }
        self.dispatch(actions);
    }

    /// Release at `p`: ends the capture and re-stacks the released item.
    pub fn pointer_release(&mut self, p: Point, button: Button) {
        let grabbed = if button == Button::Primary { self.grabber.take() } else { None };
        let Some(id) = grabbed.or_else(|| self.item_at(p)) else {
            return;
        };
        let Some(item) = self.items.get_mut(&id) else {
            return;
        };
        let actions = item.on_pointer_release(p, button);
        let released = actions.iter().any(|a| matches!(a, Action::Released { .. }));
        self.dispatch(actions);
        if released {
            self.restack(id);
        }
    }

    /// The pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        let Some(id) = self.hovered.take() else {
            return;
        };
        let actions = self.items.get_mut(&id).map(|item| item.on_pointer_leave()).unwrap_or_default();
        self.dispatch(actions);
    }

    // --- Keyboard ---

    /// Offer a key press to the selected items, top-most first. Returns
    /// whether any item consumed it.
    pub fn key_press(&mut self, key: &Key, modifiers: Modifiers) -> bool {
        let mut handled = false;
        let mut actions = Vec::new();
        for id in self.order.iter().rev() {
            if let Some(item) = self.items.get_mut(id) {
                let outcome = item.on_key_press(key, modifiers);
                handled |= outcome.handled;
                actions.extend(outcome.actions);
            }
        }
        self.dispatch(actions);
        handled
    }

    /// Releases go to every item so held-key state never leaks.
    pub fn key_release(&mut self, key: &Key) -> bool {
        let mut handled = false;
        let mut actions = Vec::new();
        for id in self.order.iter().rev() {
            if let Some(item) = self.items.get_mut(id) {
                let outcome = item.on_key_release(key);
                handled |= outcome.handled;
                actions.extend(outcome.actions);
            }
        }
        self.dispatch(actions);
        handled
    }

    // --- Timers ---

    /// Deliver a due timer token to its item.
    pub fn on_timer(&mut self, token: TimerToken) {
        let Some(item) = self.items.get_mut(&token.item) else {
            trace!(item = %token.item, "timer for removed item ignored");
            return;
        };
        let actions = item.on_timer(token);
        self.dispatch(actions);
    }

    // --- Internals ---

    fn deselect_except(&mut self, keep: Option<ItemId>) -> Vec<Action> {
        let mut actions = Vec::new();
        for id in &self.order {
            if Some(*id) == keep {
                continue;
            }
            if let Some(item) = self.items.get_mut(id) {
                actions.extend(item.set_selected(false));
            }
        }
        actions
    }

    fn restack(&mut self, id: ItemId) {
        let mut layers: Vec<Layer> = self
            .order
            .iter()
            .filter_map(|layer_id| {
                self.items.get(layer_id).map(|item| Layer {
                    id: *layer_id,
                    parent: self.parents.get(layer_id).copied(),
                    rect: item.geometry(),
                })
            })
            .collect();
        let moves = zorder::reconcile(&mut layers, id);
        if moves > 0 {
            self.order = layers.into_iter().map(|l| l.id).collect();
            debug!(%id, moves, "restacked");
            self.dispatch(vec![Action::RenderNeeded { id }]);
        }
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            match &action {
                Action::ScheduleTimer { token, delay } => self.scheduler.schedule(*token, *delay),
                Action::CancelTimer(token) => self.scheduler.cancel(*token),
                _ => {}
            }
            self.observers.notify(&action);
            if let Action::SelectionRequested { id, extend: false } = action {
                let follow = self.deselect_except(Some(id));
                self.dispatch(follow);
            }
        }
    }
}

impl Scene<ManualScheduler> {
    /// Advance the virtual clock and deliver every due timer. Returns the
    /// number of tokens delivered.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.scheduler.advance(by);
        let delivered = due.len();
        for token in due {
            self.on_timer(token);
        }
        delivered
    }

    /// Advance until no timer is pending. Returns the number of tokens delivered.
    pub fn run_until_idle(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(wait) = self.scheduler.next_due_in() {
            delivered += self.advance(wait);
        }
        delivered
    }
}
