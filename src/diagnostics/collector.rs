// SPDX-License-Identifier: MPL-2.0
//! Collector that buffers control events sent from the overlay.
//!
//! The overlay holds a [`DiagnosticsHandle`] and never blocks on it: events
//! go through a bounded channel and are dropped when the channel is full. The
//! host drains the channel into the ring buffer with
//! [`DiagnosticsCollector::process_pending`].

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    CircularBuffer, ControlEvent, ControlEventKind, ControlReport, EventCapacity, ReportMetadata,
    SerializableEvent,
};
use crate::error::{Error, Result};

/// Channel depth between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cloneable sender for control events.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ControlEvent>,
}

impl DiagnosticsHandle {
    /// Records an event now. Non-blocking; the event is dropped if the
    /// channel is full.
    pub fn log(&self, kind: ControlEventKind) {
        self.log_at(kind, Instant::now());
    }

    /// Records an event with an explicit timestamp.
    pub fn log_at(&self, kind: ControlEventKind, at: Instant) {
        let _ = self
            .event_tx
            .try_send(ControlEvent::with_timestamp(kind, at));
    }
}

/// Owns the event buffer and the receiving end of the channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<ControlEvent>,
    event_rx: Receiver<ControlEvent>,
    event_tx: Sender<ControlEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Returns a new handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer. Returns how many were moved.
    pub fn process_pending(&mut self) -> usize {
        let mut moved = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            moved += 1;
        }
        moved
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a report from the buffered events.
    #[must_use]
    pub fn build_report(&self) -> ControlReport {
        let duration_ms =
            u64::try_from(self.collection_started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::from_event(event, self.collection_started_at))
            .collect();
        ControlReport {
            metadata: ReportMetadata::new(
                self.collection_started_at_utc,
                duration_ms,
                events.len(),
            ),
            events,
        }
    }

    /// Serializes the buffered events to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self
            .export_json()
            .map_err(|err| Error::Io(format!("failed to serialize diagnostics: {err}")))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        log::info!("diagnostics report written to {}", path.display());
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(EventCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log(ControlEventKind::DragCancelled);
        handle.log(ControlEventKind::VisibilityChanged { visible: false });
        assert!(collector.is_empty());

        assert_eq!(collector.process_pending(), 2);
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ControlEventKind::DragCancelled,
                ControlEventKind::VisibilityChanged { visible: false },
            ]
        );
    }

    #[test]
    fn full_channel_drops_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        for _ in 0..DEFAULT_CHANNEL_CAPACITY + 20 {
            handle.log(ControlEventKind::SkipRequested { forward: true });
        }
        assert_eq!(collector.process_pending(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_respects_capacity() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::new(10));
        let handle = collector.handle();
        for step in 0..15 {
            handle.log(ControlEventKind::SeekEmitted {
                position_secs: f64::from(step),
            });
        }
        collector.process_pending();
        assert_eq!(collector.len(), 10);
        assert_eq!(collector.capacity(), 10);
    }

    #[test]
    fn export_json_contains_metadata_and_events() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log(ControlEventKind::ZoomRequested { zoom_in: true });
        collector.process_pending();

        let json = collector.export_json().expect("export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["metadata"]["event_count"], 1);
        assert_eq!(value["events"][0]["type"], "zoom_requested");
        assert_eq!(value["events"][0]["zoom_in"], true);
    }

    #[test]
    fn export_to_file_creates_directories() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("report.json");
        let collector = DiagnosticsCollector::default();
        collector.export_to_file(&path).expect("write report");
        assert!(path.exists());
    }
}
