//! Delayed-callback scheduling for the alert blink.
//!
//! Items never own timers. They hand out [`TimerToken`]s through
//! [`crate::action::Action::ScheduleTimer`]; the host (usually via
//! [`crate::scene::Scene`]) passes them to a [`Scheduler`] and feeds due
//! tokens back with `on_timer`. A token that no longer matches the item's
//! pending timer is ignored, so a late delivery after cancellation is
//! harmless.
//!
//! Two schedulers ship with the crate:
//!
//! | Scheduler | Clock |
//! |-----------|-------|
//! | [`ManualScheduler`] | virtual; the host advances it from its frame loop |
//! | [`TokioScheduler`] | `tokio::time`; due tokens arrive on an mpsc channel |

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::trace;

use crate::item::ItemId;

/// Identifies one scheduled callback of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    /// Item the callback belongs to.
    pub item: ItemId,
    /// Per-item sequence number; only the latest one is live.
    pub generation: u64,
}

/// A one-shot delayed callback service.
pub trait Scheduler {
    /// Deliver `token` once `delay` has elapsed.
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    /// Drop `token` if it has not been delivered yet. Unknown tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, TimerToken)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of undelivered timers.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Time until the earliest pending timer, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending.iter().map(|(due, _, _)| due.saturating_sub(self.now)).min()
    }

    /// Advance the clock and return every token now due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(Duration, u64, TimerToken)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, token)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, _, t)| *t != token);
    }
}

/// Scheduler backed by `tokio::time::sleep` tasks.
///
/// Due tokens are sent on the channel returned by [`TokioScheduler::new`];
/// the host loop receives them and calls `on_timer`.
pub struct TokioScheduler {
    handle: Handle,
    tx: UnboundedSender<TimerToken>,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Create a scheduler spawning on `handle`, plus the receiver of due tokens.
    #[must_use]
    pub fn new(handle: Handle) -> (Self, UnboundedReceiver<TimerToken>) {
        let (tx, rx) = unbounded_channel();
        (Self { handle, tx, tasks: HashMap::new() }, rx)
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.tasks.values().filter(|t| !t.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.tasks.retain(|_, task| !task.is_finished());
        let tx = self.tx.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(token).is_err() {
                trace!(item = %token.item, "timer receiver dropped");
            }
        });
        if let Some(previous) = self.tasks.insert(token, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(task) = self.tasks.remove(&token) {
            task.abort();
            trace!(item = %token.item, generation = token.generation, "timer cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}
