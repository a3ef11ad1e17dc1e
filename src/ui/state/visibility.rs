// SPDX-License-Identifier: MPL-2.0
//! Auto-hide visibility controller for the controls overlay.
//!
//! The overlay is either shown or hidden. While shown, an [`AutoHideTimer`]
//! may be armed. When it fires, the overlay hides only if playback is running.
//! Hiding automatically is only possible through the timer. Explicit host or
//! user actions (toggle, `set_visible`) can show or hide at any time.
//!
//! Interactions that must keep the overlay up for their whole duration (a
//! thumb drag, a held button) register a hold. Holds suspend the timer, and
//! releasing the last hold re-arms it.

use super::timer::AutoHideTimer;
use crate::domain::controls::{AutoHideDelay, ControlOptions};
use std::time::Instant;

/// Visibility of the controls overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Timer-driven show/hide policy.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityController {
    visibility: Visibility,
    timer: AutoHideTimer,
    is_playing: bool,
    auto_dismiss: bool,
    holds: u32,
}

impl VisibilityController {
    #[must_use]
    pub fn new(delay: AutoHideDelay, initial_visible: bool, auto_dismiss: bool) -> Self {
        Self {
            visibility: if initial_visible {
                Visibility::Shown
            } else {
                Visibility::Hidden
            },
            timer: AutoHideTimer::new(delay),
            is_playing: false,
            auto_dismiss,
            holds: 0,
        }
    }

    #[must_use]
    pub fn from_options(options: &ControlOptions) -> Self {
        Self::new(
            options.auto_hide,
            options.initial_visible,
            options.auto_dismiss,
        )
    }

    // -------------------------------------------------------------------------
    // Timer operations
    // -------------------------------------------------------------------------

    /// Arms the auto-hide timer if the overlay is shown and nothing holds it.
    ///
    /// Does not restart an armed timer.
    pub fn start_timer(&mut self, now: Instant) {
        if self.can_arm() {
            self.timer.arm(now);
        }
    }

    /// Disarms the auto-hide timer.
    pub fn stop_timer(&mut self) {
        self.timer.cancel();
    }

    /// Disarms, then arms again with the full delay.
    pub fn reset_timer(&mut self, now: Instant) {
        if self.can_arm() {
            self.timer.rearm(now);
        } else {
            self.timer.cancel();
        }
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns true if the overlay became hidden.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        if self.is_playing && self.visibility == Visibility::Shown {
            log::debug!("auto-hide timer fired, hiding controls");
            self.visibility = Visibility::Hidden;
            true
        } else {
            false
        }
    }

    fn can_arm(&self) -> bool {
        self.auto_dismiss && self.holds == 0 && self.visibility == Visibility::Shown
    }

    // -------------------------------------------------------------------------
    // Holds
    // -------------------------------------------------------------------------

    /// Registers an interaction that keeps the overlay up until released.
    pub fn hold_began(&mut self) {
        self.holds += 1;
        self.timer.cancel();
    }

    /// Releases a hold. Re-arms the timer when the last hold is released.
    pub fn hold_ended(&mut self, now: Instant) {
        self.holds = self.holds.saturating_sub(1);
        if self.holds == 0 {
            self.reset_timer(now);
        }
    }

    // -------------------------------------------------------------------------
    // Visibility and playback inputs
    // -------------------------------------------------------------------------

    /// Flips visibility. Returns the new visibility flag.
    pub fn toggle(&mut self, now: Instant) -> bool {
        let visible = !self.is_visible();
        self.set_visible(visible, now);
        visible
    }

    /// Shows or hides the overlay. Returns true if the visibility changed.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> bool {
        if visible == self.is_visible() {
            if visible {
                self.start_timer(now);
            }
            return false;
        }
        if visible {
            self.visibility = Visibility::Shown;
            self.start_timer(now);
        } else {
            self.visibility = Visibility::Hidden;
            self.timer.cancel();
        }
        true
    }

    /// Updates the playback flag that gates timer firing.
    ///
    /// Starting playback while shown arms the timer. Pausing disarms it.
    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        if self.is_playing == playing {
            return;
        }
        self.is_playing = playing;
        if playing {
            self.start_timer(now);
        } else {
            self.timer.cancel();
        }
    }

    /// Enables or disables auto-dismiss.
    pub fn set_auto_dismiss(&mut self, enabled: bool, now: Instant) {
        self.auto_dismiss = enabled;
        if enabled {
            self.start_timer(now);
        } else {
            self.timer.cancel();
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.holds > 0
    }

    /// Deadline of the armed timer, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::from_options(&ControlOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn playing_controller(now: Instant) -> VisibilityController {
        let mut controller = VisibilityController::default();
        controller.set_playing(true, now);
        controller
    }

    #[test]
    fn starts_shown_by_default() {
        let controller = VisibilityController::default();
        assert!(controller.is_visible());
        assert!(!controller.is_timer_armed());
    }

    #[test]
    fn timer_fire_while_paused_keeps_controls() {
        let start = Instant::now();
        let mut controller = VisibilityController::default();
        controller.start_timer(start);
        assert!(!controller.poll(start + ms(3500)));
        assert!(controller.is_visible());
    }

    #[test]
    fn timer_fire_while_playing_hides() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        assert!(controller.is_timer_armed());
        assert!(!controller.poll(start + ms(2999)));
        assert!(controller.poll(start + ms(3000)));
        assert!(!controller.is_visible());
        assert!(!controller.is_timer_armed());
    }

    #[test]
    fn start_timer_does_not_extend_armed_timer() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        controller.start_timer(start + ms(2000));
        assert!(controller.poll(start + ms(3000)));
    }

    #[test]
    fn periodic_reset_prevents_hiding() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        for step in 1..=10 {
            let now = start + ms(step * 1000);
            assert!(!controller.poll(now));
            controller.reset_timer(now);
        }
        assert!(controller.is_visible());
    }

    #[test]
    fn stop_timer_takes_effect_immediately() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        controller.stop_timer();
        assert!(!controller.poll(start + ms(60_000)));
        assert!(controller.is_visible());
    }

    #[test]
    fn hidden_controller_never_arms() {
        let start = Instant::now();
        let mut controller = VisibilityController::new(AutoHideDelay::default(), false, true);
        controller.set_playing(true, start);
        controller.start_timer(start);
        controller.reset_timer(start);
        assert!(!controller.is_timer_armed());
    }

    #[test]
    fn showing_while_playing_arms_timer() {
        let start = Instant::now();
        let mut controller = VisibilityController::new(AutoHideDelay::default(), false, true);
        controller.set_playing(true, start);
        assert!(controller.toggle(start));
        assert!(controller.is_timer_armed());
    }

    #[test]
    fn toggle_hides_and_disarms() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        assert!(!controller.toggle(start));
        assert!(!controller.is_timer_armed());
        assert!(!controller.is_visible());
    }

    #[test]
    fn holds_suspend_timer_until_last_release() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        controller.hold_began();
        controller.hold_began();
        controller.reset_timer(start + ms(100));
        assert!(!controller.is_timer_armed());

        controller.hold_ended(start + ms(5000));
        assert!(!controller.poll(start + ms(20_000)));
        assert!(controller.is_visible());

        controller.hold_ended(start + ms(20_000));
        assert!(controller.is_timer_armed());
        assert!(controller.poll(start + ms(23_000)));
    }

    #[test]
    fn unbalanced_hold_release_is_harmless() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        controller.hold_ended(start);
        assert!(!controller.is_held());
        assert!(controller.is_timer_armed());
    }

    #[test]
    fn auto_dismiss_disabled_never_hides() {
        let start = Instant::now();
        let mut controller = VisibilityController::new(AutoHideDelay::default(), true, false);
        controller.set_playing(true, start);
        controller.start_timer(start);
        assert!(!controller.poll(start + ms(60_000)));
        assert!(controller.is_visible());
    }

    #[test]
    fn pausing_disarms_and_resuming_rearms() {
        let start = Instant::now();
        let mut controller = playing_controller(start);
        controller.set_playing(false, start + ms(1000));
        assert!(!controller.is_timer_armed());
        controller.set_playing(true, start + ms(5000));
        assert_eq!(controller.deadline(), Some(start + ms(8000)));
    }
}
