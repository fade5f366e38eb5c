//! Per-turn countdown

use serde::{Deserialize, Serialize};

/// Seconds granted for each turn
pub const DEFAULT_TURN_SECONDS: u32 = 30;

/// Result of advancing the countdown by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer is stopped; nothing happened
    Idle,
    /// Time left after the decrement
    Remaining(u32),
    /// The countdown just reached zero and stopped itself
    Expired,
}

/// Countdown restarted at the beginning of every turn.
///
/// The timer holds no clock. The host calls [`TurnTimer::tick`] once per
/// elapsed interval, which keeps it fully deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTimer {
    start: u32,
    remaining: u32,
    running: bool,
}

impl TurnTimer {
    /// Create a stopped timer that will count down from `start` seconds.
    pub fn new(start: u32) -> Self {
        Self {
            start,
            remaining: start,
            running: false,
        }
    }

    /// Refill to the starting value and run.
    pub fn restart(&mut self) {
        self.remaining = self.start;
        self.running = true;
    }

    /// Stop counting; the remaining time is kept for display.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn start_value(&self) -> u32 {
        self.start
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS)
    }
}
