// SPDX-License-Identifier: MPL-2.0
//! Progress model: time ↔ pixel conversions along the seek track.
//!
//! Both functions are total. An unknown duration or an unmeasured track yields
//! 0 instead of dividing by zero, and out-of-range inputs are clamped.

/// Maps a playback position to a pixel offset along a track of `track_width`.
///
/// The position is clamped to `[0, duration]` first, so the result always lies
/// in `[0, track_width]`.
#[must_use]
pub fn position_to_offset(position: f64, duration: f64, track_width: f32) -> f32 {
    if !is_positive(duration) || !is_positive(f64::from(track_width)) {
        return 0.0;
    }
    let position = if position.is_nan() { 0.0 } else { position };
    let fraction = position.clamp(0.0, duration) / duration;
    #[allow(clippy::cast_possible_truncation)]
    let offset = (fraction * f64::from(track_width)) as f32;
    offset
}

/// Maps a pixel offset back to a time in seconds.
///
/// The offset is clamped to `[0, track_width]`, so the result always lies in
/// `[0, duration]`.
#[must_use]
pub fn offset_to_time(offset: f32, track_width: f32, duration: f64) -> f64 {
    if !is_positive(duration) || !is_positive(f64::from(track_width)) {
        return 0.0;
    }
    let offset = if offset.is_nan() { 0.0 } else { offset };
    let fraction = f64::from(offset.clamp(0.0, track_width)) / f64::from(track_width);
    duration * fraction
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
