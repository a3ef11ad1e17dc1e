// SPDX-License-Identifier: MPL-2.0
//! Controls domain types.
//!
//! This module provides pure value types for the playback controls:
//! - [`AutoHideDelay`]: Inactivity delay before the overlay hides
//! - [`HitSlop`]: Touch area expansion around the slider thumb
//! - [`GestureTiming`]: Tap, double-tap and long-press thresholds
//! - [`SkipStep`]: Host-side relative seek size
//! - [`ControlOptions`]: All of the above resolved from configuration

mod newtypes;
mod options;

pub use newtypes::{AutoHideDelay, GestureTiming, HitSlop, SkipDirection, SkipStep};
pub use options::{ControlOptions, SkipPolicy};
