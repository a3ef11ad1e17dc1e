// SPDX-License-Identifier: MPL-2.0
//! Simulated playback engine driving the demo.
//!
//! Position advances in real time while playing. The buffered position runs
//! a fixed lead ahead of it, the way a network stream would.

use crate::application::port::PlaybackEngine;
use crate::error::PlatformError;
use std::time::Duration;

/// Default length of the simulated media.
pub const DEFAULT_DURATION_SECS: f64 = 180.0;

/// How far the buffer runs ahead of playback.
pub const BUFFER_LEAD_SECS: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPlayer {
    position: f64,
    buffered: f64,
    duration: f64,
    playing: bool,
}

impl SimulatedPlayer {
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            DEFAULT_DURATION_SECS
        };
        Self {
            position: 0.0,
            buffered: BUFFER_LEAD_SECS.min(duration),
            duration,
            playing: false,
        }
    }

    /// Advances playback by `elapsed`. Stops at the end of the media.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.playing {
            self.position = (self.position + elapsed.as_secs_f64()).min(self.duration);
            if self.position >= self.duration {
                log::debug!("simulated playback reached the end");
                self.playing = false;
            }
        }
        let target = (self.position + BUFFER_LEAD_SECS).min(self.duration);
        self.buffered = self.buffered.max(target);
    }
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl PlaybackEngine for SimulatedPlayer {
    fn play(&mut self) {
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, position_secs: f64) -> Result<(), PlatformError> {
        if !position_secs.is_finite() {
            return Err(PlatformError::Seek(format!(
                "invalid position {position_secs}"
            )));
        }
        self.position = position_secs.clamp(0.0, self.duration);
        // Seeking outside the buffered range restarts buffering there.
        if self.position > self.buffered {
            self.buffered = self.position;
        }
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn playable_position(&self) -> f64 {
        self.buffered
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
