// SPDX-License-Identifier: MPL-2.0
//! Default host policy for control effects.
//!
//! Buttons skip by the button step, double taps by the fast step, and both
//! are clamped to `[0, duration]` using the engine's own position. Effects
//! the engine has no notion of (zoom, visibility) are handed back to the
//! caller as a [`HostOutcome`].

use super::port::{FullscreenCapability, PlaybackEngine};
use crate::domain::controls::{SkipDirection, SkipPolicy, SkipStep};
use crate::error::PlatformError;
use crate::ui::controls::Effect;

/// What is left for the caller after an effect was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostOutcome {
    /// Fully handled by the engine.
    Handled,
    /// The window mode changed to this value.
    FullscreenChanged(bool),
    /// The playback state changed to this value.
    PlayingChanged(bool),
    ZoomIn,
    ZoomOut,
    VisibilityChanged(bool),
}

/// Applies control effects to a playback engine and a window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostPolicy {
    skip: SkipPolicy,
}

impl HostPolicy {
    #[must_use]
    pub fn new(skip: SkipPolicy) -> Self {
        Self { skip }
    }

    #[must_use]
    pub fn skip(&self) -> SkipPolicy {
        self.skip
    }

    /// Applies one effect.
    ///
    /// # Errors
    ///
    /// Propagates the engine's seek failure or the window's fullscreen
    /// failure. The engine state is unchanged in both cases.
    pub fn apply(
        &self,
        effect: Effect,
        engine: &mut impl PlaybackEngine,
        window: &mut impl FullscreenCapability,
    ) -> Result<HostOutcome, PlatformError> {
        match effect {
            Effect::Seek(position) => {
                let duration = engine.duration().max(0.0);
                engine.seek(position.clamp(0.0, duration))?;
                Ok(HostOutcome::Handled)
            }
            Effect::FastForward => skip(engine, self.skip.double_tap, SkipDirection::Forward),
            Effect::FastRewind => skip(engine, self.skip.double_tap, SkipDirection::Backward),
            Effect::Forward => skip(engine, self.skip.button, SkipDirection::Forward),
            Effect::Rewind => skip(engine, self.skip.button, SkipDirection::Backward),
            Effect::Play => {
                engine.play();
                Ok(HostOutcome::PlayingChanged(true))
            }
            Effect::Pause => {
                engine.pause();
                Ok(HostOutcome::PlayingChanged(false))
            }
            Effect::ToggleFullscreen => {
                let target = !window.is_fullscreen();
                window.set_fullscreen(target)?;
                Ok(HostOutcome::FullscreenChanged(target))
            }
            Effect::ZoomIn => Ok(HostOutcome::ZoomIn),
            Effect::ZoomOut => Ok(HostOutcome::ZoomOut),
            Effect::VisibilityChanged(visible) => Ok(HostOutcome::VisibilityChanged(visible)),
        }
    }
}

fn skip(
    engine: &mut impl PlaybackEngine,
    step: SkipStep,
    direction: SkipDirection,
) -> Result<HostOutcome, PlatformError> {
    let target = step.target(engine.position(), engine.duration(), direction);
    log::debug!("skip {direction:?} by {}s to {target:.2}s", step.value());
    engine.seek(target)?;
    Ok(HostOutcome::Handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Debug, Default)]
    struct FakeEngine {
        position: f64,
        duration: f64,
        playing: bool,
        seeks: Vec<f64>,
        reject_seeks: bool,
    }

    impl PlaybackEngine for FakeEngine {
        fn play(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn seek(&mut self, position_secs: f64) -> Result<(), PlatformError> {
            if self.reject_seeks {
                return Err(PlatformError::Seek("rejected".into()));
            }
            self.seeks.push(position_secs);
            self.position = position_secs;
            Ok(())
        }

        fn position(&self) -> f64 {
            self.position
        }

        fn playable_position(&self) -> f64 {
            self.position
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    #[derive(Debug, Default)]
    struct FakeWindow {
        fullscreen: bool,
        fail: bool,
    }

    impl FullscreenCapability for FakeWindow {
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }

        fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), PlatformError> {
            if self.fail {
                return Err(PlatformError::Fullscreen("denied".into()));
            }
            self.fullscreen = fullscreen;
            Ok(())
        }
    }

    fn engine_at(position: f64, duration: f64) -> FakeEngine {
        FakeEngine {
            position,
            duration,
            ..FakeEngine::default()
        }
    }

    #[test]
    fn fast_rewind_never_goes_below_zero() {
        let mut engine = engine_at(2.0, 20.0);
        let mut window = FakeWindow::default();
        HostPolicy::default()
            .apply(Effect::FastRewind, &mut engine, &mut window)
            .expect("seek accepted");
        assert_eq!(engine.seeks.len(), 1);
        assert_abs_diff_eq!(engine.seeks[0], 0.0);
    }

    #[test]
    fn fast_forward_never_passes_duration() {
        let mut engine = engine_at(15.0, 20.0);
        let mut window = FakeWindow::default();
        HostPolicy::default()
            .apply(Effect::FastForward, &mut engine, &mut window)
            .expect("seek accepted");
        assert_abs_diff_eq!(engine.seeks[0], 20.0);
    }

    #[test]
    fn buttons_use_the_button_step() {
        let mut engine = engine_at(30.0, 100.0);
        let mut window = FakeWindow::default();
        let policy = HostPolicy::default();
        policy
            .apply(Effect::Forward, &mut engine, &mut window)
            .expect("seek accepted");
        policy
            .apply(Effect::Rewind, &mut engine, &mut window)
            .expect("seek accepted");
        assert_eq!(engine.seeks, vec![35.0, 30.0]);
    }

    #[test]
    fn custom_policy_changes_step_sizes() {
        let mut engine = engine_at(30.0, 100.0);
        let mut window = FakeWindow::default();
        let policy = HostPolicy::new(SkipPolicy {
            button: SkipStep::new(1.0),
            double_tap: SkipStep::new(30.0),
        });
        policy
            .apply(Effect::FastForward, &mut engine, &mut window)
            .expect("seek accepted");
        assert_eq!(engine.seeks, vec![60.0]);
    }

    #[test]
    fn play_and_pause_drive_engine() {
        let mut engine = engine_at(0.0, 10.0);
        let mut window = FakeWindow::default();
        let policy = HostPolicy::default();
        assert_eq!(
            policy.apply(Effect::Play, &mut engine, &mut window),
            Ok(HostOutcome::PlayingChanged(true))
        );
        assert!(engine.is_playing());
        policy
            .apply(Effect::Pause, &mut engine, &mut window)
            .expect("pause");
        assert!(!engine.is_playing());
    }

    #[test]
    fn toggle_fullscreen_flips_window_mode() {
        let mut engine = engine_at(0.0, 10.0);
        let mut window = FakeWindow::default();
        let outcome =
            HostPolicy::default().apply(Effect::ToggleFullscreen, &mut engine, &mut window);
        assert_eq!(outcome, Ok(HostOutcome::FullscreenChanged(true)));
        assert!(window.fullscreen);
    }

    #[test]
    fn platform_failures_are_propagated() {
        let mut engine = FakeEngine {
            reject_seeks: true,
            ..engine_at(5.0, 10.0)
        };
        let mut window = FakeWindow {
            fail: true,
            ..FakeWindow::default()
        };
        let policy = HostPolicy::default();
        assert!(matches!(
            policy.apply(Effect::Seek(3.0), &mut engine, &mut window),
            Err(PlatformError::Seek(_))
        ));
        assert!(matches!(
            policy.apply(Effect::ToggleFullscreen, &mut engine, &mut window),
            Err(PlatformError::Fullscreen(_))
        ));
        assert!(!window.fullscreen);
    }

    #[test]
    fn seek_requests_are_clamped_to_media() {
        let mut engine = engine_at(5.0, 10.0);
        let mut window = FakeWindow::default();
        HostPolicy::default()
            .apply(Effect::Seek(42.0), &mut engine, &mut window)
            .expect("seek accepted");
        assert_eq!(engine.seeks, vec![10.0]);
    }
}
