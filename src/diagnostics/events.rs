// SPDX-License-Identifier: MPL-2.0
//! Control events captured for diagnostics.
//!
//! Each effect the overlay hands to the host, plus each visibility change, is
//! recorded as one event. Events carry a monotonic timestamp for ordering and
//! are serialized with a `type` tag.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Which on-screen button produced an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlButton {
    Play,
    Pause,
    Rewind,
    Forward,
    Fullscreen,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlEventKind {
    /// A completed thumb drag or accessibility action requested a seek.
    SeekEmitted { position_secs: f64 },
    /// A thumb drag was cancelled before completing.
    DragCancelled,
    /// The overlay was shown or hidden.
    VisibilityChanged { visible: bool },
    /// A double tap requested a fast skip.
    SkipRequested { forward: bool },
    /// A pinch requested a zoom change.
    ZoomRequested { zoom_in: bool },
    /// An on-screen button was activated.
    ButtonActivated { button: ControlButton },
}

/// A control event with the instant it was raised.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlEvent {
    pub timestamp: Instant,
    pub kind: ControlEventKind,
}

impl ControlEvent {
    #[must_use]
    pub fn new(kind: ControlEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: ControlEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// Serialized form of a [`ControlEvent`], relative to collection start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: ControlEventKind,
}

impl SerializableEvent {
    /// Converts an event relative to `started_at`. Events recorded before the
    /// start saturate to 0.
    #[must_use]
    pub fn from_event(event: &ControlEvent, started_at: Instant) -> Self {
        let elapsed = event.timestamp.saturating_duration_since(started_at);
        Self {
            timestamp_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            kind: event.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn kinds_serialize_with_type_tag() {
        let json = serde_json::to_value(ControlEventKind::SeekEmitted {
            position_secs: 12.5,
        })
        .expect("serialize");
        assert_eq!(json["type"], "seek_emitted");
        assert_eq!(json["position_secs"], 12.5);

        let json = serde_json::to_value(ControlEventKind::ButtonActivated {
            button: ControlButton::Fullscreen,
        })
        .expect("serialize");
        assert_eq!(json["type"], "button_activated");
        assert_eq!(json["button"], "fullscreen");
    }

    #[test]
    fn serializable_event_flattens_kind() {
        let start = Instant::now();
        let event = ControlEvent::with_timestamp(
            ControlEventKind::VisibilityChanged { visible: false },
            start + Duration::from_millis(1500),
        );
        let json =
            serde_json::to_value(SerializableEvent::from_event(&event, start)).expect("serialize");
        assert_eq!(json["timestamp_ms"], 1500);
        assert_eq!(json["type"], "visibility_changed");
        assert_eq!(json["visible"], false);
    }

    #[test]
    fn events_before_start_saturate_to_zero() {
        let early = Instant::now();
        let event = ControlEvent::with_timestamp(ControlEventKind::DragCancelled, early);
        let serialized = SerializableEvent::from_event(&event, early + Duration::from_secs(1));
        assert_eq!(serialized.timestamp_ms, 0);
    }
}
