// SPDX-License-Identifier: MPL-2.0
//! Control event diagnostics.
//!
//! Records what the overlay asked the host to do so a session can be
//! inspected or exported as JSON after the fact.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{CircularBuffer, EventCapacity};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ControlButton, ControlEvent, ControlEventKind, SerializableEvent};
pub use report::{ControlReport, ReportMetadata};
