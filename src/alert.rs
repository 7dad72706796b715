//! Alert blink: a short colour cycle signalling a resize beyond the size bounds.
//!
//! ```text
//!            trigger                 timer              timer (cycle < 3)
//!   Quiet ───────────▶ Flash(1) ───────────▶ Secondary(1) ───────────▶ Flash(2) ─ …
//!     ▲                                                                          │
//!     └──────────────────────── timer (cycle == 3): settle ◀── Secondary(3) ◀────┘
//! ```
//!
//! While a cycle is running, further triggers are ignored. Each phase change
//! arms exactly one timer; a delivered token that is not the armed one is
//! stale and does nothing.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use crate::consts::ALERT_BLINK_CYCLES;
use crate::item::ItemId;
use crate::scheduler::TimerToken;

/// Where the blink currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkPhase {
    /// No alert; the item shows its regular colours.
    #[default]
    Quiet,
    /// Showing the alert colour.
    Flash,
    /// Showing the secondary alert colour.
    Secondary,
}

/// Outcome of delivering a timer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkStep {
    /// Not the armed token; nothing changed.
    Stale,
    /// Phase advanced; the returned token must be scheduled.
    Rearm(TimerToken),
    /// The last cycle ended; back to quiet.
    Settled,
}

/// Blink state of one item.
#[derive(Debug, Clone)]
pub struct AlertBlink {
    item: ItemId,
    phase: BlinkPhase,
    cycle: u8,
    generation: u64,
    pending: Option<TimerToken>,
}

impl AlertBlink {
    #[must_use]
    pub fn new(item: ItemId) -> Self {
        Self { item, phase: BlinkPhase::Quiet, cycle: 0, generation: 0, pending: None }
    }

    #[must_use]
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Blink cycle in progress: `0` when quiet, then `1..=ALERT_BLINK_CYCLES`
    /// counting each Flash/Secondary pair. A non-zero value debounces
    /// [`AlertBlink::trigger`].
    #[must_use]
    pub fn counter(&self) -> u8 {
        self.cycle
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cycle > 0
    }

    /// The armed timer, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Start a blink. Returns the token to schedule, or `None` when a blink
    /// is already running.
    pub fn trigger(&mut self) -> Option<TimerToken> {
        if self.is_active() {
            return None;
        }
        self.cycle = 1;
        self.phase = BlinkPhase::Flash;
        Some(self.arm())
    }

    /// Deliver a timer token.
    pub fn fire(&mut self, token: TimerToken) -> BlinkStep {
        if self.pending != Some(token) {
            return BlinkStep::Stale;
        }
        self.pending = None;
        match self.phase {
            BlinkPhase::Flash => {
                self.phase = BlinkPhase::Secondary;
                BlinkStep::Rearm(self.arm())
            }
            BlinkPhase::Secondary if self.cycle < ALERT_BLINK_CYCLES => {
                self.cycle += 1;
                self.phase = BlinkPhase::Flash;
                BlinkStep::Rearm(self.arm())
            }
            BlinkPhase::Secondary => {
                self.phase = BlinkPhase::Quiet;
                self.cycle = 0;
                BlinkStep::Settled
            }
            BlinkPhase::Quiet => BlinkStep::Stale,
        }
    }

    /// Stop immediately. Returns the armed token so the caller can cancel it.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.phase = BlinkPhase::Quiet;
        self.cycle = 0;
        self.pending.take()
    }

    fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        let token = TimerToken { item: self.item, generation: self.generation };
        self.pending = Some(token);
        token
    }
}
