// SPDX-License-Identifier: MPL-2.0
//! Exported diagnostics report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SerializableEvent;

/// Header of an exported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    pub crate_version: String,
    /// When collection started (RFC 3339).
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// Metadata plus every buffered event, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}
