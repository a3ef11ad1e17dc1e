// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::ui::controls;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// Native event forwarded by the event subscription.
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
    /// Periodic tick advancing the simulated player and the overlay timers.
    Tick(Instant),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VIDEO_CONTROLS_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report when `Ctrl+D` is pressed.
    pub diagnostics_out: Option<PathBuf>,
    /// Length of the simulated media in seconds.
    pub duration_secs: Option<f64>,
}
