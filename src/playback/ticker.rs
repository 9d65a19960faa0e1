//! Cancellable repeating schedule for autoplay
//!
//! The playback engine owns exactly one [`Ticker`]. Arming replaces any
//! outstanding schedule and cancelling clears it, so a stale deadline can
//! never outlive the trace it was advancing.

use std::time::{Duration, Instant};

/// A repeating deadline polled from the control loop.
///
/// `fire` consumes at most one due firing per call and pushes the deadline
/// forward by one interval, so a caller polling slower than the interval
/// catches up by calling `fire` until it returns `false`.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    next_deadline: Option<Instant>,
    interval: Duration,
}

impl Ticker {
    pub fn new() -> Self {
        Ticker {
            next_deadline: None,
            interval: Duration::ZERO,
        }
    }

    /// Schedule repeated firing every `interval`, first due one interval
    /// after `now`. Replaces any existing schedule.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.interval = interval;
        self.next_deadline = Some(now + interval);
    }

    /// Drop the outstanding schedule, if any
    pub fn cancel(&mut self) {
        self.next_deadline = None;
    }

    /// Whether a schedule is outstanding
    pub fn is_armed(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Consume one due firing at time `now`.
    ///
    /// Returns `false` when unarmed or when the deadline has not passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_deadline {
            Some(deadline) if now >= deadline => {
                self.next_deadline = Some(deadline + self.interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
