// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.
//!
//! Native pointer, touch, keyboard and window events are forwarded raw and
//! translated in `App::update`, where the cursor position is known.

use super::Message;
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Period of the tick driving playback, the auto-hide timer and the fade.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Forwards the events the overlay and the demo care about.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let relevant = match &event {
            event::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonPressed(mouse::Button::Left)
                | mouse::Event::ButtonReleased(mouse::Button::Left),
            ) => true,
            event::Event::Touch(
                touch::Event::FingerPressed { .. }
                | touch::Event::FingerMoved { .. }
                | touch::Event::FingerLifted { .. }
                | touch::Event::FingerLost { .. },
            ) => true,
            event::Event::Window(
                window::Event::Opened { .. }
                | window::Event::Resized(_)
                | window::Event::Unfocused,
            ) => true,
            // Keyboard shortcuts only when no widget captured the key.
            event::Event::Keyboard(_) => status == event::Status::Ignored,
            _ => false,
        };
        relevant.then(|| Message::RawEvent {
            window: window_id,
            event,
        })
    })
}

/// Periodic tick. Runs always: playback advances even while hidden.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
