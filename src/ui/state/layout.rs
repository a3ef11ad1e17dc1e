// SPDX-License-Identifier: MPL-2.0
//! Layout tracking for the seek track and thumb.
//!
//! Pure measurement cache: it stores what the layout pass reported and hands
//! out safe defaults until something has been measured.

use crate::config::DEFAULT_THUMB_SIZE;
use iced::{Rectangle, Size};

/// Last measured geometry of the seek track and its thumb.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutTracker {
    track: Option<Rectangle>,
    thumb: Option<Size>,
}

impl LayoutTracker {
    /// Records the track bounds. Returns true if the width changed.
    pub fn measure_track(&mut self, bounds: Rectangle) -> bool {
        let previous = self.track_width();
        self.track = Some(bounds);
        (previous - self.track_width()).abs() > f32::EPSILON
    }

    /// Records the thumb size.
    pub fn measure_thumb(&mut self, size: Size) {
        self.thumb = Some(size);
    }

    /// Returns the measured track bounds, if any.
    #[must_use]
    pub fn track(&self) -> Option<Rectangle> {
        self.track
    }

    /// Whether the track has been measured at least once.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.track.is_some()
    }

    /// Track width, 0 until measured.
    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.track
            .map_or(0.0, |bounds| sanitize(bounds.width))
    }

    /// Track height, 0 until measured.
    #[must_use]
    pub fn track_height(&self) -> f32 {
        self.track
            .map_or(0.0, |bounds| sanitize(bounds.height))
    }

    /// Thumb size, 20×20 until measured.
    #[must_use]
    pub fn thumb_size(&self) -> Size {
        self.thumb
            .unwrap_or(Size::new(DEFAULT_THUMB_SIZE, DEFAULT_THUMB_SIZE))
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Point;

    #[test]
    fn unmeasured_tracker_reports_zero_geometry() {
        let layout = LayoutTracker::default();
        assert!(!layout.is_measured());
        assert_abs_diff_eq!(layout.track_width(), 0.0);
        assert_abs_diff_eq!(layout.track_height(), 0.0);
        assert_eq!(layout.thumb_size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn measure_track_reports_width_changes() {
        let mut layout = LayoutTracker::default();
        let bounds = Rectangle::new(Point::new(10.0, 5.0), Size::new(300.0, 4.0));
        assert!(layout.measure_track(bounds));
        assert!(!layout.measure_track(bounds));
        assert_abs_diff_eq!(layout.track_width(), 300.0);
        assert_abs_diff_eq!(layout.track_height(), 4.0);
    }

    #[test]
    fn negative_width_is_treated_as_zero() {
        let mut layout = LayoutTracker::default();
        layout.measure_track(Rectangle::new(Point::ORIGIN, Size::new(-10.0, 4.0)));
        assert_abs_diff_eq!(layout.track_width(), 0.0);
    }
}
