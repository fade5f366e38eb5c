//! Deferred application of computer moves.
//!
//! Engines compute the computer's move synchronously; the pause before it is
//! shown is a host concern. [`DeferredMove`] is the scheduled task a host arms
//! when a move result says the computer is due, then polls with the current
//! time. Nothing here sleeps.

use std::time::{Duration, Instant};

/// A one-shot timer for the next computer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredMove {
    delay: Duration,
    due: Option<Instant>,
}

impl DeferredMove {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    /// Arm the task to fire `delay` after `now`. Re-arming moves the deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    /// Drop any pending move, e.g. on restart.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Time left before the move fires, if one is pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// A repeating one-second beat for the turn countdown.
///
/// The phase is taken from the last [`TickClock::reset`], so a turn that
/// starts mid-beat still gets a full period before its first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// Start a fresh period at `now`, dropping any partial one.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.period;
    }

    /// Time until the next beat
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// True once per elapsed period; advances to the following beat.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now >= self.next {
            self.next += self.period;
            true
        } else {
            false
        }
    }
}
