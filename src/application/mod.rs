// SPDX-License-Identifier: MPL-2.0
//! Application layer: collaborator ports and the default host policy.
//!
//! - [`port`]: traits a host implements for its player and window
//! - [`host`]: turns control effects into calls on those ports
//!
//! The controls never talk to a player directly. They emit effects, and a
//! host decides what each one means. [`host::HostPolicy`] is the default
//! reading of those effects.
//!
//! # Example
//!
//! ```ignore
//! use iced_video_controls::application::host::HostPolicy;
//!
//! let policy = HostPolicy::default();
//! for effect in controls.handle(message, now) {
//!     policy.apply(effect, &mut player, &mut window)?;
//! }
//! ```

pub mod host;
pub mod port;
