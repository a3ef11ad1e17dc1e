// SPDX-License-Identifier: MPL-2.0
//! Resolved control options.
//!
//! The config file stores every field as optional; this module turns a
//! config section into validated values with defaults filled in.

use super::newtypes::{AutoHideDelay, GestureTiming, HitSlop, SkipStep};
use crate::config::{
    ControlsConfig, PlaybackConfig, DEFAULT_AUTO_DISMISS, DEFAULT_DOUBLE_TAP_MAX_DELAY_MS,
    DEFAULT_DOUBLE_TAP_MAX_MS, DEFAULT_INITIAL_VISIBLE, DEFAULT_LONG_PRESS_MIN_MS,
    DEFAULT_SINGLE_TAP_MAX_MS,
};

/// Behaviour options of the controls overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlOptions {
    pub auto_hide: AutoHideDelay,
    pub initial_visible: bool,
    pub auto_dismiss: bool,
    pub hit_slop: HitSlop,
    pub timing: GestureTiming,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            auto_hide: AutoHideDelay::default(),
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            auto_dismiss: DEFAULT_AUTO_DISMISS,
            hit_slop: HitSlop::default(),
            timing: GestureTiming::default(),
        }
    }
}

impl From<&ControlsConfig> for ControlOptions {
    fn from(config: &ControlsConfig) -> Self {
        Self {
            auto_hide: config
                .auto_hide_ms
                .map(AutoHideDelay::from_millis)
                .unwrap_or_default(),
            initial_visible: config.initial_visible.unwrap_or(DEFAULT_INITIAL_VISIBLE),
            auto_dismiss: config.auto_dismiss.unwrap_or(DEFAULT_AUTO_DISMISS),
            hit_slop: config
                .thumb_hit_slop
                .map(HitSlop::uniform)
                .unwrap_or_default(),
            timing: GestureTiming::from_millis(
                config.single_tap_max_ms.unwrap_or(DEFAULT_SINGLE_TAP_MAX_MS),
                config.double_tap_max_ms.unwrap_or(DEFAULT_DOUBLE_TAP_MAX_MS),
                config
                    .double_tap_max_delay_ms
                    .unwrap_or(DEFAULT_DOUBLE_TAP_MAX_DELAY_MS),
                config.long_press_min_ms.unwrap_or(DEFAULT_LONG_PRESS_MIN_MS),
            ),
        }
    }
}

/// Skip sizes a host applies to forward/rewind requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipPolicy {
    /// Step used by the forward and rewind buttons.
    pub button: SkipStep,
    /// Step used by double-tap skips.
    pub double_tap: SkipStep,
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self {
            button: SkipStep::default(),
            double_tap: SkipStep::fast(),
        }
    }
}

impl From<&PlaybackConfig> for SkipPolicy {
    fn from(config: &PlaybackConfig) -> Self {
        let defaults = Self::default();
        Self {
            button: config.skip_step_secs.map_or(defaults.button, SkipStep::new),
            double_tap: config
                .fast_skip_step_secs
                .map_or(defaults.double_tap, SkipStep::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    #[test]
    fn default_config_resolves_to_default_options() {
        let options = ControlOptions::from(&ControlsConfig::default());
        assert_eq!(options, ControlOptions::default());
    }

    #[test]
    fn empty_config_section_uses_defaults() {
        let config = ControlsConfig {
            auto_hide_ms: None,
            initial_visible: None,
            auto_dismiss: None,
            thumb_hit_slop: None,
            single_tap_max_ms: None,
            double_tap_max_ms: None,
            double_tap_max_delay_ms: None,
            long_press_min_ms: None,
        };
        assert_eq!(ControlOptions::from(&config), ControlOptions::default());
    }

    #[test]
    fn config_values_are_clamped() {
        let config = ControlsConfig {
            auto_hide_ms: Some(1),
            thumb_hit_slop: Some(-3.0),
            initial_visible: Some(false),
            ..ControlsConfig::default()
        };
        let options = ControlOptions::from(&config);
        assert_eq!(options.auto_hide.as_duration(), Duration::from_millis(500));
        assert_abs_diff_eq!(options.hit_slop.left, 0.0);
        assert!(!options.initial_visible);
    }

    #[test]
    fn skip_policy_reads_playback_section() {
        let config = PlaybackConfig {
            skip_step_secs: Some(15.0),
            fast_skip_step_secs: None,
        };
        let policy = SkipPolicy::from(&config);
        assert_abs_diff_eq!(policy.button.value(), 15.0);
        assert_abs_diff_eq!(policy.double_tap.value(), 10.0);
    }
}
