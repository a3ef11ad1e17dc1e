// SPDX-License-Identifier: MPL-2.0
//! Tap-or-long-press recognizer for control buttons.
//!
//! Reports a pressed flag for the whole contact, for visual feedback. On
//! release, a short tap and a long press are exclusive outcomes and both
//! activate. A press held between the two thresholds, or a cancelled press,
//! does not activate.

use crate::domain::controls::GestureTiming;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
    Released,
    /// Contact left the target or was taken by the platform.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Pressed,
    Released { activated: bool },
}

/// Press state of one touchable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Touchable {
    pressed_at: Option<Instant>,
}

impl Touchable {
    pub fn handle(&mut self, msg: Message, timing: &GestureTiming, now: Instant) -> Effect {
        match msg {
            Message::Pressed => {
                if self.pressed_at.is_some() {
                    return Effect::None;
                }
                self.pressed_at = Some(now);
                Effect::Pressed
            }
            Message::Released => match self.pressed_at.take() {
                Some(pressed_at) => {
                    let held = now.saturating_duration_since(pressed_at);
                    let tap = held <= timing.button_tap_max();
                    let long_press = held >= timing.long_press_min();
                    Effect::Released {
                        activated: tap || long_press,
                    }
                }
                None => Effect::None,
            },
            Message::Cancelled => match self.pressed_at.take() {
                Some(_) => Effect::Released { activated: false },
                None => Effect::None,
            },
        }
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press_for(held: Duration, timing: &GestureTiming) -> Effect {
        let start = Instant::now();
        let mut touchable = Touchable::default();
        assert_eq!(touchable.handle(Message::Pressed, timing, start), Effect::Pressed);
        assert!(touchable.is_pressed());
        let effect = touchable.handle(Message::Released, timing, start + held);
        assert!(!touchable.is_pressed());
        effect
    }

    #[test]
    fn short_tap_activates() {
        let effect = press_for(Duration::from_millis(80), &GestureTiming::default());
        assert_eq!(effect, Effect::Released { activated: true });
    }

    #[test]
    fn long_press_activates() {
        let effect = press_for(Duration::from_secs(2), &GestureTiming::default());
        assert_eq!(effect, Effect::Released { activated: true });
    }

    #[test]
    fn press_between_thresholds_does_not_activate() {
        let timing = GestureTiming::from_millis(100, 250, 500, 1500);
        let effect = press_for(Duration::from_millis(1000), &timing);
        assert_eq!(effect, Effect::Released { activated: false });
    }

    #[test]
    fn cancel_never_activates() {
        let start = Instant::now();
        let timing = GestureTiming::default();
        let mut touchable = Touchable::default();
        touchable.handle(Message::Pressed, &timing, start);
        assert_eq!(
            touchable.handle(Message::Cancelled, &timing, start),
            Effect::Released { activated: false }
        );
        assert_eq!(
            touchable.handle(Message::Released, &timing, start),
            Effect::None
        );
    }

    #[test]
    fn repeated_press_is_ignored() {
        let start = Instant::now();
        let timing = GestureTiming::default();
        let mut touchable = Touchable::default();
        touchable.handle(Message::Pressed, &timing, start);
        assert_eq!(
            touchable.handle(Message::Pressed, &timing, start),
            Effect::None
        );
    }
}
