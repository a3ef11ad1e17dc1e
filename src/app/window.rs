// SPDX-License-Identifier: MPL-2.0
//! Window mode capability backed by iced window commands.
//!
//! The mode switch itself is a [`Task`], so `set_fullscreen` only records the
//! request and [`WindowMode::take_task`] hands the command to the runtime.

use super::Message;
use crate::application::port::FullscreenCapability;
use crate::error::PlatformError;
use iced::{window, Task};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowMode {
    id: Option<window::Id>,
    fullscreen: bool,
    pending: Option<window::Mode>,
}

impl WindowMode {
    /// Records the window events come from.
    pub fn set_id(&mut self, id: window::Id) {
        self.id = Some(id);
    }

    /// Command for the last requested mode change, if any.
    pub fn take_task(&mut self) -> Task<Message> {
        match (self.pending.take(), self.id) {
            (Some(mode), Some(id)) => window::set_mode(id, mode),
            _ => Task::none(),
        }
    }
}

impl FullscreenCapability for WindowMode {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), PlatformError> {
        if self.id.is_none() {
            return Err(PlatformError::Fullscreen(
                "no window has reported an event yet".into(),
            ));
        }
        self.fullscreen = fullscreen;
        self.pending = Some(if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        });
        Ok(())
    }
}
