//! Synchronous notification list.
//!
//! Callbacks run in subscription order, immediately after the mutation that
//! produced the action.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use crate::action::Action;

/// Handle returned by [`Observers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Action)>;

#[derive(Default)]
pub struct Observers {
    next: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Action) + 'static) -> SubscriptionId {
        self.next += 1;
        let id = SubscriptionId(self.next);
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sub, _)| *sub != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, action: &Action) {
        for (_, callback) in &mut self.entries {
            callback(action);
        }
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
