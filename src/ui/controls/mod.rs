// SPDX-License-Identifier: MPL-2.0
//! Video controls overlay.
//!
//! Each piece follows the same shape: a `State`, a `Message` enum, an
//! `Effect` enum and a `handle` method taking the current instant.
//!
//! - [`slider`]: seek slider driven by thumb pans
//! - [`button_group`]: rewind, play/pause and forward buttons
//! - [`fullscreen`]: fullscreen toggle
//! - [`time_display`]: time label formatting
//! - [`layout`]: window-space geometry shared by drawing and hit-testing
//! - [`component`]: the composition shell hosts talk to
//! - [`view`]: iced rendering

pub mod button_group;
pub mod component;
pub mod fullscreen;
pub mod layout;
pub mod slider;
pub mod time_display;
pub mod view;

pub use component::{Effect, Message, VideoControls};
pub use layout::OverlayLayout;
pub use view::{view, ViewContext};
