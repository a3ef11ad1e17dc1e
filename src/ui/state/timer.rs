// SPDX-License-Identifier: MPL-2.0
//! Single-shot auto-hide timer handle.
//!
//! The timer holds a deadline instead of a callback. Its owner polls it with
//! the current time, so cancelling takes effect immediately and a cancelled
//! timer can never fire.

use crate::domain::controls::AutoHideDelay;
use std::time::Instant;

/// Owned, cancellable single-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideTimer {
    delay: AutoHideDelay,
    deadline: Option<Instant>,
}

impl AutoHideTimer {
    #[must_use]
    pub fn new(delay: AutoHideDelay) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms the timer unless it is already armed. Returns true if it armed.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.delay.as_duration());
        true
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancels and arms again with the full delay.
    pub fn rearm(&mut self, now: Instant) {
        self.cancel();
        self.arm(now);
    }

    /// Consumes the timer if its deadline has passed.
    ///
    /// Returns true exactly once per arming.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for AutoHideTimer {
    fn default() -> Self {
        Self::new(AutoHideDelay::default())
    }
}
