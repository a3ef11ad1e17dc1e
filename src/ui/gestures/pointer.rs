// SPDX-License-Identifier: MPL-2.0
//! Raw pointer input fed to the gesture recognizers.
//!
//! Touch fingers map one to one. A mouse is reported as finger
//! [`MOUSE_FINGER`] by the host.

use iced::touch;
use iced::Point;
use std::time::Instant;

/// Identifier of one contact point.
pub type FingerId = u64;

/// Finger id used for the primary mouse button.
pub const MOUSE_FINGER: FingerId = 0;

/// Lifecycle phase of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The platform took the contact away (e.g. a system gesture).
    Cancel,
}

/// One timestamped pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub finger: FingerId,
    pub position: Point,
    pub at: Instant,
}

impl PointerEvent {
    #[must_use]
    pub fn new(phase: PointerPhase, finger: FingerId, position: Point, at: Instant) -> Self {
        Self {
            phase,
            finger,
            position,
            at,
        }
    }

    #[must_use]
    pub fn down(finger: FingerId, position: Point, at: Instant) -> Self {
        Self::new(PointerPhase::Down, finger, position, at)
    }

    #[must_use]
    pub fn moved(finger: FingerId, position: Point, at: Instant) -> Self {
        Self::new(PointerPhase::Move, finger, position, at)
    }

    #[must_use]
    pub fn up(finger: FingerId, position: Point, at: Instant) -> Self {
        Self::new(PointerPhase::Up, finger, position, at)
    }

    #[must_use]
    pub fn cancel(finger: FingerId, position: Point, at: Instant) -> Self {
        Self::new(PointerPhase::Cancel, finger, position, at)
    }

    /// Converts an iced touch event.
    #[must_use]
    pub fn from_touch(event: touch::Event, at: Instant) -> Self {
        match event {
            touch::Event::FingerPressed { id, position } => Self::down(id.0, position, at),
            touch::Event::FingerMoved { id, position } => Self::moved(id.0, position, at),
            touch::Event::FingerLifted { id, position } => Self::up(id.0, position, at),
            touch::Event::FingerLost { id, position } => Self::cancel(id.0, position, at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_events_map_to_phases() {
        let now = Instant::now();
        let position = Point::new(4.0, 2.0);
        let lost = PointerEvent::from_touch(
            touch::Event::FingerLost {
                id: touch::Finger(7),
                position,
            },
            now,
        );
        assert_eq!(lost, PointerEvent::cancel(7, position, now));

        let pressed = PointerEvent::from_touch(
            touch::Event::FingerPressed {
                id: touch::Finger(3),
                position,
            },
            now,
        );
        assert_eq!(pressed.phase, PointerPhase::Down);
        assert_eq!(pressed.finger, 3);
    }
}
