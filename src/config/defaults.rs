// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: Overlay auto-hide delay and dismissal
//! - **Gestures**: Tap, double-tap and long-press timing, thumb hit-slop
//! - **Slider**: Thumb size and accessibility adjust step
//! - **Skip**: Host-side forward/rewind step sizes
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default delay before the controls overlay hides itself (in milliseconds).
pub const DEFAULT_AUTO_HIDE_MS: u64 = 3000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_AUTO_HIDE_MS: u64 = 500;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_AUTO_HIDE_MS: u64 = 60_000;

/// Whether the overlay is visible when the controls are mounted.
pub const DEFAULT_INITIAL_VISIBLE: bool = true;

/// Whether the overlay hides itself after inactivity.
pub const DEFAULT_AUTO_DISMISS: bool = true;

/// Overlay fade-in duration when becoming visible (in milliseconds).
pub const FADE_IN_MS: u64 = 200;

/// Overlay fade-out duration when hiding (in milliseconds).
pub const FADE_OUT_MS: u64 = 600;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum press duration for a single tap on the overlay (in milliseconds).
pub const DEFAULT_SINGLE_TAP_MAX_MS: u64 = 100;

/// Maximum press duration of each tap in a double tap (in milliseconds).
pub const DEFAULT_DOUBLE_TAP_MAX_MS: u64 = 250;

/// Maximum delay between the first release and the second press of a
/// double tap (in milliseconds).
pub const DEFAULT_DOUBLE_TAP_MAX_DELAY_MS: u64 = 500;

/// Maximum press duration for a tap on a control button (in milliseconds).
pub const DEFAULT_BUTTON_TAP_MAX_MS: u64 = 500;

/// Minimum hold duration before a button press becomes a long press
/// (in milliseconds).
pub const DEFAULT_LONG_PRESS_MIN_MS: u64 = 500;

/// Upper bound for any configurable gesture timing (in milliseconds).
pub const MAX_GESTURE_TIMING_MS: u64 = 5000;

/// Default hit-slop around the slider thumb (in pixels, all sides).
pub const DEFAULT_THUMB_HIT_SLOP: f32 = 20.0;

/// Maximum hit-slop around the slider thumb (in pixels).
pub const MAX_THUMB_HIT_SLOP: f32 = 100.0;

/// Relative scale change a pinch must reach before it is recognized.
pub const PINCH_ACTIVATION_DELTA: f32 = 0.05;

/// Distance a finger may travel before a tap candidate fails (in pixels).
pub const TAP_MAX_DISTANCE: f32 = 10.0;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Thumb size used for hit-testing until the thumb has been measured.
pub const DEFAULT_THUMB_SIZE: f32 = 20.0;

/// Seconds added or removed by the slider's accessibility adjust actions.
pub const ACCESSIBILITY_ADJUST_SECS: f64 = 5.0;

/// Thumb scale while it is pressed.
pub const THUMB_PRESSED_SCALE: f32 = 1.25;

// ==========================================================================
// Skip Defaults (host policy)
// ==========================================================================

/// Default forward/rewind button step (in seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 5.0;

/// Default double-tap skip step (in seconds).
pub const DEFAULT_FAST_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip step (in seconds).
pub const MIN_SKIP_STEP_SECS: f64 = 0.5;

/// Maximum skip step (in seconds).
pub const MAX_SKIP_STEP_SECS: f64 = 300.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of control events kept in the diagnostics buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Auto-hide validation
    assert!(MIN_AUTO_HIDE_MS > 0);
    assert!(MAX_AUTO_HIDE_MS >= MIN_AUTO_HIDE_MS);
    assert!(DEFAULT_AUTO_HIDE_MS >= MIN_AUTO_HIDE_MS);
    assert!(DEFAULT_AUTO_HIDE_MS <= MAX_AUTO_HIDE_MS);

    // Gesture timing validation
    assert!(DEFAULT_SINGLE_TAP_MAX_MS > 0);
    assert!(DEFAULT_SINGLE_TAP_MAX_MS <= DEFAULT_DOUBLE_TAP_MAX_MS);
    assert!(DEFAULT_DOUBLE_TAP_MAX_MS <= MAX_GESTURE_TIMING_MS);
    assert!(DEFAULT_DOUBLE_TAP_MAX_DELAY_MS <= MAX_GESTURE_TIMING_MS);
    assert!(DEFAULT_LONG_PRESS_MIN_MS <= MAX_GESTURE_TIMING_MS);
    assert!(DEFAULT_BUTTON_TAP_MAX_MS <= DEFAULT_LONG_PRESS_MIN_MS);
    assert!(DEFAULT_THUMB_HIT_SLOP >= 0.0);
    assert!(DEFAULT_THUMB_HIT_SLOP <= MAX_THUMB_HIT_SLOP);
    assert!(PINCH_ACTIVATION_DELTA > 0.0);
    assert!(TAP_MAX_DISTANCE > 0.0);

    // Slider validation
    assert!(DEFAULT_THUMB_SIZE > 0.0);
    assert!(THUMB_PRESSED_SCALE >= 1.0);

    // Skip validation
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_FAST_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
