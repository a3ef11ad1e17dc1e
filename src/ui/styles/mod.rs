// SPDX-License-Identifier: MPL-2.0
//! Styles for the controls overlay.
//!
//! Every style takes the current fade opacity so the whole overlay fades as
//! one layer.

pub mod overlay;
pub mod tooltip;
