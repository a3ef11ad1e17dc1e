// SPDX-License-Identifier: MPL-2.0
//! Controls newtypes.
//!
//! This module provides type-safe wrappers for the configurable values of the
//! controls overlay, ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_AUTO_HIDE_MS, DEFAULT_BUTTON_TAP_MAX_MS, DEFAULT_DOUBLE_TAP_MAX_DELAY_MS,
    DEFAULT_DOUBLE_TAP_MAX_MS, DEFAULT_FAST_SKIP_STEP_SECS, DEFAULT_LONG_PRESS_MIN_MS,
    DEFAULT_SINGLE_TAP_MAX_MS, DEFAULT_SKIP_STEP_SECS, DEFAULT_THUMB_HIT_SLOP, MAX_AUTO_HIDE_MS,
    MAX_GESTURE_TIMING_MS, MAX_SKIP_STEP_SECS, MAX_THUMB_HIT_SLOP, MIN_AUTO_HIDE_MS,
    MIN_SKIP_STEP_SECS,
};
use std::time::Duration;

// =============================================================================
// AutoHideDelay
// =============================================================================

/// Delay before the overlay hides itself, clamped to 500 ms – 60 s.
///
/// # Example
///
/// ```
/// use iced_video_controls::domain::controls::AutoHideDelay;
///
/// let delay = AutoHideDelay::from_millis(3000);
/// assert_eq!(delay.as_millis(), 3000);
///
/// // Values outside range are clamped
/// assert_eq!(AutoHideDelay::from_millis(10).as_millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideDelay(u64);

impl AutoHideDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTO_HIDE_MS, MAX_AUTO_HIDE_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTO_HIDE_MS)
    }
}

// =============================================================================
// HitSlop
// =============================================================================

/// Extra touch area around the slider thumb, per side, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSlop {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl HitSlop {
    /// Same slop on all four sides.
    #[must_use]
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates a slop from individual sides, each clamped to `0..=100`.
    #[must_use]
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        let clamp = |v: f32| {
            if v.is_finite() {
                v.clamp(0.0, MAX_THUMB_HIT_SLOP)
            } else {
                0.0
            }
        };
        Self {
            top: clamp(top),
            right: clamp(right),
            bottom: clamp(bottom),
            left: clamp(left),
        }
    }
}

impl Default for HitSlop {
    fn default() -> Self {
        Self::uniform(DEFAULT_THUMB_HIT_SLOP)
    }
}

// =============================================================================
// GestureTiming
// =============================================================================

/// Timing thresholds for the tap, double-tap and long-press recognizers.
///
/// Every threshold is clamped to at most 5 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTiming {
    single_tap_max: Duration,
    double_tap_max: Duration,
    double_tap_max_delay: Duration,
    button_tap_max: Duration,
    long_press_min: Duration,
}

impl GestureTiming {
    /// Creates timing thresholds from millisecond values.
    #[must_use]
    pub fn from_millis(
        single_tap_max: u64,
        double_tap_max: u64,
        double_tap_max_delay: u64,
        long_press_min: u64,
    ) -> Self {
        let clamp = |ms: u64| Duration::from_millis(ms.min(MAX_GESTURE_TIMING_MS));
        Self {
            single_tap_max: clamp(single_tap_max),
            double_tap_max: clamp(double_tap_max),
            double_tap_max_delay: clamp(double_tap_max_delay),
            button_tap_max: clamp(DEFAULT_BUTTON_TAP_MAX_MS.min(long_press_min)),
            long_press_min: clamp(long_press_min),
        }
    }

    /// Longest press that still counts as a single tap on the overlay.
    #[must_use]
    pub fn single_tap_max(self) -> Duration {
        self.single_tap_max
    }

    /// Longest press that still counts as one tap of a double tap.
    #[must_use]
    pub fn double_tap_max(self) -> Duration {
        self.double_tap_max
    }

    /// Longest pause between the two taps of a double tap.
    #[must_use]
    pub fn double_tap_max_delay(self) -> Duration {
        self.double_tap_max_delay
    }

    /// Longest press that still counts as a tap on a control button.
    #[must_use]
    pub fn button_tap_max(self) -> Duration {
        self.button_tap_max
    }

    /// Hold duration after which a button press becomes a long press.
    #[must_use]
    pub fn long_press_min(self) -> Duration {
        self.long_press_min
    }
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_SINGLE_TAP_MAX_MS,
            DEFAULT_DOUBLE_TAP_MAX_MS,
            DEFAULT_DOUBLE_TAP_MAX_DELAY_MS,
            DEFAULT_LONG_PRESS_MIN_MS,
        )
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Direction of a relative skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Forward,
    Backward,
}

/// Relative skip size in seconds, clamped to 0.5 s – 300 s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to the valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SKIP_STEP_SECS, MAX_SKIP_STEP_SECS))
    }

    /// Default step of the double-tap skip.
    #[must_use]
    pub fn fast() -> Self {
        Self(DEFAULT_FAST_SKIP_STEP_SECS)
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Seek target for a skip from `position`, kept within `[0, duration]`.
    #[must_use]
    pub fn target(self, position: f64, duration: f64, direction: SkipDirection) -> f64 {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let position = if position.is_finite() { position } else { 0.0 };
        let raw = match direction {
            SkipDirection::Forward => position + self.0,
            SkipDirection::Backward => position - self.0,
        };
        raw.clamp(0.0, duration)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(DEFAULT_SKIP_STEP_SECS)
    }
}
