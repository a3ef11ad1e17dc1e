// SPDX-License-Identifier: MPL-2.0
//! Overlay fade animation.
//!
//! Linear opacity ramp: 200 ms when showing, 600 ms when hiding. A new target
//! starts from the opacity reached so far, so reversing mid-fade never jumps.

use crate::config::{FADE_IN_MS, FADE_OUT_MS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFade {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
}

impl OverlayFade {
    /// A fade resting at fully shown or fully hidden.
    #[must_use]
    pub fn settled(visible: bool) -> Self {
        let value = if visible { 1.0 } else { 0.0 };
        Self {
            from: value,
            to: value,
            started: None,
            duration: Duration::ZERO,
        }
    }

    /// Starts fading toward the given visibility.
    pub fn fade_to(&mut self, visible: bool, now: Instant) {
        let current = self.opacity(now);
        let (to, millis) = if visible {
            (1.0, FADE_IN_MS)
        } else {
            (0.0, FADE_OUT_MS)
        };
        self.from = current;
        self.to = to;
        self.started = Some(now);
        self.duration = Duration::from_millis(millis);
    }

    /// Opacity at `now`, in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    /// Whether the fade still changes at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < self.duration)
    }
}
