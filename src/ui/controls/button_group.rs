// SPDX-License-Identifier: MPL-2.0
//! Rewind / play-pause / forward button group.
//!
//! A held button keeps the overlay open: pressing registers a hold on the
//! visibility controller and releasing drops it. Every activation resets the
//! auto-hide timer before the host is notified.

use crate::domain::controls::GestureTiming;
use crate::ui::design_tokens::spacing;
use crate::ui::gestures::touchable::{self, Touchable};
use crate::ui::state::VisibilityController;
use std::time::Instant;

/// One button of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Rewind,
    /// Shows "play" while paused and "pause" while playing.
    PlayPause,
    Forward,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Rewind, Button::PlayPause, Button::Forward];
}

/// How the buttons are spread horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// Fixed gap in pixels between buttons.
    Fixed(f32),
    /// Full width, outer buttons at the edges.
    SpaceBetween,
    /// Full width, equal space around each button.
    SpaceAround,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Fixed(spacing::BUTTON_GAP)
    }
}

/// Button group state.
#[derive(Debug, Clone, Default)]
pub struct State {
    rewind: Touchable,
    play_pause: Touchable,
    forward: Touchable,
    spacing: Spacing,
}

/// Messages for the button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed(Button),
    Released(Button),
    /// Pointer left the button or the contact was lost.
    Cancelled(Button),
    /// Keyboard activation, with no press to track.
    Activated(Button),
}

/// Effects produced by the button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Play,
    Pause,
    Forward,
    Rewind,
}

impl State {
    #[must_use]
    pub fn new(spacing: Spacing) -> Self {
        Self {
            spacing,
            ..Self::default()
        }
    }

    /// Handle a button group message.
    pub fn handle(
        &mut self,
        msg: Message,
        is_playing: bool,
        visibility: &mut VisibilityController,
        timing: &GestureTiming,
        now: Instant,
    ) -> Effect {
        let (button, touch_msg) = match msg {
            Message::Pressed(button) => (button, touchable::Message::Pressed),
            Message::Released(button) => (button, touchable::Message::Released),
            Message::Cancelled(button) => (button, touchable::Message::Cancelled),
            Message::Activated(button) => {
                visibility.reset_timer(now);
                log::debug!("{button:?} button activated from the keyboard");
                return activation(button, is_playing);
            }
        };

        match self.touchable_mut(button).handle(touch_msg, timing, now) {
            touchable::Effect::None => Effect::None,
            touchable::Effect::Pressed => {
                visibility.hold_began();
                Effect::None
            }
            touchable::Effect::Released { activated } => {
                visibility.hold_ended(now);
                if !activated {
                    return Effect::None;
                }
                visibility.reset_timer(now);
                log::debug!("{button:?} button activated");
                activation(button, is_playing)
            }
        }
    }

    fn touchable_mut(&mut self, button: Button) -> &mut Touchable {
        match button {
            Button::Rewind => &mut self.rewind,
            Button::PlayPause => &mut self.play_pause,
            Button::Forward => &mut self.forward,
        }
    }

    /// Whether the button is currently held, for press feedback.
    #[must_use]
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Rewind => self.rewind.is_pressed(),
            Button::PlayPause => self.play_pause.is_pressed(),
            Button::Forward => self.forward.is_pressed(),
        }
    }

    #[must_use]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }
}

fn activation(button: Button, is_playing: bool) -> Effect {
    match button {
        Button::Rewind => Effect::Rewind,
        Button::Forward => Effect::Forward,
        Button::PlayPause if is_playing => Effect::Pause,
        Button::PlayPause => Effect::Play,
    }
}
