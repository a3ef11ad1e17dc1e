// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`playback`]: the player the controls steer
//! - [`fullscreen`]: the window mode capability
//!
//! # Design Notes
//!
//! - Ports use plain seconds and booleans, no iced types
//! - Failures are [`PlatformError`](crate::error::PlatformError)s; the
//!   controls themselves never fail
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod fullscreen;
pub mod playback;

pub use fullscreen::FullscreenCapability;
pub use playback::PlaybackEngine;
