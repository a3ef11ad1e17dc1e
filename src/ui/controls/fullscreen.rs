// SPDX-License-Identifier: MPL-2.0
//! Fullscreen toggle sub-component.
//!
//! The control only requests the change. The host owns the actual window mode
//! and reports it back with [`State::set_fullscreen`].

use crate::domain::controls::GestureTiming;
use crate::ui::gestures::touchable::{self, Touchable};
use crate::ui::state::VisibilityController;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    touch: Touchable,
    is_fullscreen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
    Released,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ToggleFullscreen,
}

impl State {
    pub fn handle(
        &mut self,
        msg: Message,
        visibility: &mut VisibilityController,
        timing: &GestureTiming,
        now: Instant,
    ) -> Effect {
        let touch_msg = match msg {
            Message::Pressed => touchable::Message::Pressed,
            Message::Released => touchable::Message::Released,
            Message::Cancelled => touchable::Message::Cancelled,
        };
        match self.touch.handle(touch_msg, timing, now) {
            touchable::Effect::Released { activated: true } => {
                visibility.reset_timer(now);
                Effect::ToggleFullscreen
            }
            _ => Effect::None,
        }
    }

    /// Records the window mode reported by the host.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
    }

    /// Selects the "exit" glyph when true, "enter" otherwise.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.touch.is_pressed()
    }
}
