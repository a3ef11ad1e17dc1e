// SPDX-License-Identifier: MPL-2.0
//! This module handles the controls configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[controls]` - Auto-hide policy, gesture timing, thumb hit-slop
//! - `[playback]` - Host skip steps
//! - `[diagnostics]` - Event buffer size
//!
//! # Examples
//!
//! ```no_run
//! use iced_video_controls::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.controls.auto_hide_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Overlay and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Delay before the overlay hides itself (milliseconds).
    #[serde(default = "default_auto_hide_ms", skip_serializing_if = "Option::is_none")]
    pub auto_hide_ms: Option<u64>,

    /// Whether the overlay starts visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_visible: Option<bool>,

    /// Whether the overlay hides itself after inactivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_dismiss: Option<bool>,

    /// Extra touch area around the slider thumb (pixels).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_hit_slop: Option<f32>,

    /// Maximum press duration of a single tap (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_tap_max_ms: Option<u64>,

    /// Maximum press duration of each tap in a double tap (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_max_ms: Option<u64>,

    /// Maximum delay between the two taps of a double tap (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_max_delay_ms: Option<u64>,

    /// Hold duration before a button press becomes a long press (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_press_min_ms: Option<u64>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
            initial_visible: Some(DEFAULT_INITIAL_VISIBLE),
            auto_dismiss: Some(DEFAULT_AUTO_DISMISS),
            thumb_hit_slop: Some(DEFAULT_THUMB_HIT_SLOP),
            single_tap_max_ms: Some(DEFAULT_SINGLE_TAP_MAX_MS),
            double_tap_max_ms: Some(DEFAULT_DOUBLE_TAP_MAX_MS),
            double_tap_max_delay_ms: Some(DEFAULT_DOUBLE_TAP_MAX_DELAY_MS),
            long_press_min_ms: Some(DEFAULT_LONG_PRESS_MIN_MS),
        }
    }
}

/// Host playback policy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Forward/rewind button step (seconds).
    #[serde(default = "default_skip_step_secs", skip_serializing_if = "Option::is_none")]
    pub skip_step_secs: Option<f64>,

    /// Double-tap skip step (seconds).
    #[serde(
        default = "default_fast_skip_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub fast_skip_step_secs: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_step_secs: default_skip_step_secs(),
            fast_skip_step_secs: default_fast_skip_step_secs(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of control events kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Controls configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Overlay and gesture settings.
    #[serde(default)]
    pub controls: ControlsConfig,

    /// Host playback policy settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_HIDE_MS)
}

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_fast_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_FAST_SKIP_STEP_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the reason as the warning.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default config: {err}");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            controls: ControlsConfig {
                auto_hide_ms: Some(4500),
                initial_visible: Some(false),
                auto_dismiss: Some(false),
                thumb_hit_slop: Some(12.0),
                ..ControlsConfig::default()
            },
            playback: PlaybackConfig {
                skip_step_secs: Some(15.0),
                fast_skip_step_secs: Some(30.0),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(50),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.controls.auto_hide_ms, Some(DEFAULT_AUTO_HIDE_MS));
        assert_eq!(loaded.playback.skip_step_secs, Some(DEFAULT_SKIP_STEP_SECS));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.controls.auto_hide_ms, Some(3000));
        assert_eq!(config.controls.initial_visible, Some(true));
        assert_eq!(config.controls.auto_dismiss, Some(true));
        assert_eq!(config.controls.thumb_hit_slop, Some(20.0));
        assert_eq!(config.controls.single_tap_max_ms, Some(100));
        assert_eq!(config.controls.double_tap_max_ms, Some(250));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let mut config = Config::default();
        config.controls.auto_hide_ms = Some(1234);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.controls.auto_hide_ms, Some(1234));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        let warning = warning.expect("corrupted file should warn");
        assert!(warning.starts_with("Config Error"), "got {warning}");
        assert_eq!(config, Config::default());
    }
}
