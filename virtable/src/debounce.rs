//! Debounce timers driven by the host's clock.
//!
//! The engine has no background work. A timer only records a deadline; the
//! host calls back in with the current time and the timer reports whether
//! it fired. Re-triggering replaces the pending deadline, so each timer has
//! at most one callback outstanding.

use std::time::{Duration, Instant};

/// Window-resize recalculation delay.
pub const RESIZE_DEBOUNCE_MS: u64 = 400;
/// Quiet period after which scrolling is considered finished.
pub const SCROLL_IDLE_MS: u64 = 150;

/// Fires once after a period with no new triggers.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Register activity at `now`, cancelling any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether the deadline has passed. Fires at most once per trigger.
    pub fn should_execute(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before firing, `None` if nothing is pending.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Cancel without firing.
    pub fn reset(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
