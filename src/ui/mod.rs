// SPDX-License-Identifier: MPL-2.0
//! User interface of the controls overlay.
//!
//! Follows the Elm-style "state down, messages up" pattern used throughout
//! the crate.
//!
//! - [`state`] - Reusable state machines (visibility, thumb, timers, layout)
//! - [`gestures`] - Pointer model and gesture recognition
//! - [`controls`] - Controls sub-components, composition shell and view
//! - [`styles`] - Overlay and tooltip styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod gestures;
pub mod state;
pub mod styles;
