// SPDX-License-Identifier: MPL-2.0
//! Time labels shown beside the seek track.

/// Formats the current position as `m:ss` (minutes unpadded).
#[must_use]
pub fn format_current(seconds: f64) -> String {
    let total_secs = whole_seconds(seconds);
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Formats the total duration as `mm:ss`, or `hh:mm:ss` from one hour up.
#[must_use]
pub fn format_total(seconds: f64) -> String {
    let total_secs = whole_seconds(seconds);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_time_has_unpadded_minutes() {
        assert_eq!(format_current(0.0), "0:00");
        assert_eq!(format_current(9.9), "0:09");
        assert_eq!(format_current(125.0), "2:05");
        assert_eq!(format_current(3725.0), "62:05");
    }

    #[test]
    fn total_time_pads_minutes() {
        assert_eq!(format_total(45.0), "00:45");
        assert_eq!(format_total(125.0), "02:05");
    }

    #[test]
    fn total_time_shows_hours() {
        assert_eq!(format_total(3665.0), "01:01:05");
    }

    #[test]
    fn negative_and_non_finite_values_render_as_zero() {
        assert_eq!(format_current(-10.0), "0:00");
        assert_eq!(format_total(f64::NAN), "00:00");
        assert_eq!(format_total(f64::INFINITY), "00:00");
    }
}
