// SPDX-License-Identifier: MPL-2.0
//! Thumb position reconciler.
//!
//! The seek thumb has two possible owners: the playback position pushed by the
//! host, and a drag gesture. [`OffsetSource`] makes them mutually exclusive.
//! While a drag is active, position pushes only update bookkeeping. The
//! dragged offset stays on screen until the drag ends, and the next push after
//! that takes control again.

use super::progress::{offset_to_time, position_to_offset};

/// An active drag: the offset captured at drag start plus the cumulative
/// horizontal translation reported by the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub anchor: f32,
    pub translation: f32,
}

impl DragSession {
    /// Dragged offset clamped to the track.
    #[must_use]
    pub fn offset(&self, track_width: f32) -> f32 {
        let raw = self.anchor + self.translation;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, track_width.max(0.0))
    }
}

/// Which signal owns the rendered thumb offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetSource {
    /// Offset derives from the externally pushed playback position.
    Followed { offset: f32 },
    /// Offset derives from a live drag.
    Dragging(DragSession),
}

impl Default for OffsetSource {
    fn default() -> Self {
        Self::Followed { offset: 0.0 }
    }
}

/// Reconciles the playback clock and drag input into one thumb offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThumbReconciler {
    source: OffsetSource,
    current_time: f64,
    playable_time: f64,
    duration: f64,
    track_width: f32,
}

impl ThumbReconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // External inputs
    // -------------------------------------------------------------------------

    /// Accepts a playback position from the host.
    ///
    /// The value is always recorded. It moves the thumb only in Followed mode.
    pub fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
        self.resync();
    }

    /// Accepts a buffered position. Never touches the thumb.
    pub fn set_playable_time(&mut self, secs: f64) {
        self.playable_time = secs;
    }

    /// Updates the media duration and re-syncs a followed thumb.
    pub fn set_duration(&mut self, secs: f64) {
        self.duration = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        self.resync();
    }

    /// Updates the measured track width and re-syncs a followed thumb.
    pub fn set_track_width(&mut self, width: f32) {
        self.track_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.resync();
    }

    fn resync(&mut self) {
        if let OffsetSource::Followed { offset } = &mut self.source {
            *offset = position_to_offset(self.current_time, self.duration, self.track_width);
        }
    }

    // -------------------------------------------------------------------------
    // Drag lifecycle
    // -------------------------------------------------------------------------

    /// Enters Dragging mode, anchored at the current offset.
    ///
    /// Returns false if a drag was already active.
    pub fn begin_drag(&mut self) -> bool {
        match self.source {
            OffsetSource::Followed { offset } => {
                log::debug!("thumb drag began at offset {offset:.1}");
                self.source = OffsetSource::Dragging(DragSession {
                    anchor: offset,
                    translation: 0.0,
                });
                true
            }
            OffsetSource::Dragging(_) => false,
        }
    }

    /// Applies the cumulative translation of the active drag.
    ///
    /// Returns the new clamped offset, or `None` outside a drag.
    pub fn update_drag(&mut self, translation: f32) -> Option<f32> {
        match &mut self.source {
            OffsetSource::Dragging(session) => {
                session.translation = translation;
                Some(session.offset(self.track_width))
            }
            OffsetSource::Followed { .. } => None,
        }
    }

    /// Completes the drag and returns the seek time for the final offset.
    ///
    /// The thumb keeps the dragged offset until the next position push.
    /// Returns `None` if no drag was active, so a release is reported at most
    /// once.
    pub fn end_drag(&mut self) -> Option<f64> {
        let OffsetSource::Dragging(session) = self.source else {
            return None;
        };
        let offset = session.offset(self.track_width);
        self.source = OffsetSource::Followed { offset };
        let time = offset_to_time(offset, self.track_width, self.duration);
        log::debug!("thumb drag ended, seeking to {time:.3}s");
        Some(time)
    }

    /// Cancels an active drag without producing a seek.
    ///
    /// Safe to call in any mode. Returns true if a drag was cancelled.
    pub fn finalize(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        log::debug!("thumb drag cancelled");
        self.source = OffsetSource::Followed { offset: 0.0 };
        self.resync();
        true
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn source(&self) -> OffsetSource {
        self.source
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.source, OffsetSource::Dragging(_))
    }

    /// Rendered thumb offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        match self.source {
            OffsetSource::Followed { offset } => offset.clamp(0.0, self.track_width),
            OffsetSource::Dragging(session) => session.offset(self.track_width),
        }
    }

    /// Time the thumb currently points at.
    #[must_use]
    pub fn time_under_thumb(&self) -> f64 {
        offset_to_time(self.offset(), self.track_width, self.duration)
    }

    /// Width of the played bar, from the last reported position.
    #[must_use]
    pub fn active_width(&self) -> f32 {
        position_to_offset(self.current_time, self.duration, self.track_width)
    }

    /// Width of the buffered bar, from the last reported playable position.
    #[must_use]
    pub fn playable_width(&self) -> f32 {
        position_to_offset(self.playable_time, self.duration, self.track_width)
    }

    /// Seek target for an accessibility adjust of `delta` seconds.
    #[must_use]
    pub fn adjust_target(&self, delta: f64) -> f64 {
        let current = if self.current_time.is_finite() {
            self.current_time
        } else {
            0.0
        };
        (current + delta).clamp(0.0, self.duration)
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn playable_time(&self) -> f64 {
        self.playable_time
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.track_width
    }
}
