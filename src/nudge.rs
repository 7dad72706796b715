//! Keyboard nudge: held direction keys compose into one displacement vector.
//!
//! Each mapped key contributes its delta exactly once while held, so
//! auto-repeat presses keep moving the item by the current vector without
//! growing it, and holding two arrows moves diagonally.

#[cfg(test)]
#[path = "nudge_test.rs"]
mod nudge_test;

use std::collections::{HashMap, HashSet};

use crate::geom::Point;
use crate::input::Key;

/// Key name → displacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyMap {
    entries: HashMap<Key, Point>,
}

impl KeyMap {
    /// Empty map: every key is unmapped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four arrow keys, each moving `step` canvas units.
    #[must_use]
    pub fn arrows(step: f64) -> Self {
        let mut map = Self::new();
        map.insert(Key::from("ArrowUp"), Point::new(0.0, -step));
        map.insert(Key::from("ArrowDown"), Point::new(0.0, step));
        map.insert(Key::from("ArrowLeft"), Point::new(-step, 0.0));
        map.insert(Key::from("ArrowRight"), Point::new(step, 0.0));
        map
    }

    pub fn insert(&mut self, key: Key, delta: Point) {
        self.entries.insert(key, delta);
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<Point> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Held-key state and the vector sum of the held deltas.
#[derive(Debug, Clone, Default)]
pub struct NudgeAccumulator {
    keymap: KeyMap,
    pressed: HashSet<Key>,
    accumulated: Point,
}

impl NudgeAccumulator {
    #[must_use]
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap, pressed: HashSet::new(), accumulated: Point::default() }
    }

    #[must_use]
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Replace the key map; held keys are forgotten.
    pub fn set_keymap(&mut self, keymap: KeyMap) {
        self.keymap = keymap;
        self.reset();
    }

    /// Register a press. Returns the vector to apply, or `None` for an
    /// unmapped key. Only the first press of a held key adds its delta.
    pub fn press(&mut self, key: &Key) -> Option<Point> {
        let delta = self.keymap.get(key)?;
        if self.pressed.insert(key.clone()) {
            self.accumulated = self.accumulated + delta;
        }
        Some(self.accumulated)
    }

    /// Register a release. Returns `false` for an unmapped key. Releasing a
    /// key that is not held changes nothing.
    pub fn release(&mut self, key: &Key) -> bool {
        let Some(delta) = self.keymap.get(key) else {
            return false;
        };
        if self.pressed.remove(key) {
            self.accumulated = self.accumulated - delta;
        }
        true
    }

    #[must_use]
    pub fn accumulated(&self) -> Point {
        self.accumulated
    }

    #[must_use]
    pub fn is_pressed(&self, key: &Key) -> bool {
        self.pressed.contains(key)
    }

    /// Forget every held key, e.g. when keyboard focus is lost.
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.accumulated = Point::default();
    }
}
