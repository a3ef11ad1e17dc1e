// SPDX-License-Identifier: MPL-2.0
//! Playback engine port.
//!
//! # Design Notes
//!
//! - Positions are seconds as `f64`, matching what the slider reports
//! - A seek is a request; the engine reports where it actually landed
//!   through [`PlaybackEngine::position`] on its own schedule
//! - The host feeds `position` and `playable_position` back into the controls

use crate::error::PlatformError;

/// Port for the player driven by the controls.
///
/// # Example
///
/// ```ignore
/// use iced_video_controls::application::port::PlaybackEngine;
///
/// fn sync(engine: &impl PlaybackEngine, controls: &mut VideoControls, now: Instant) {
///     controls.set_duration(engine.duration());
///     controls.set_current_time(engine.position());
///     controls.set_playable_time(engine.playable_position());
///     controls.set_playing(engine.is_playing(), now);
/// }
/// ```
pub trait PlaybackEngine {
    fn play(&mut self);

    fn pause(&mut self);

    /// Requests playback from `position_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Seek`] if the engine rejects the request.
    fn seek(&mut self, position_secs: f64) -> Result<(), PlatformError>;

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Buffered position in seconds.
    fn playable_position(&self) -> f64;

    /// Media duration in seconds, 0 while unknown.
    fn duration(&self) -> f64;

    fn is_playing(&self) -> bool;
}
