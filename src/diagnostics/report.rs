// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structures for JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of `halfloop` that generated the report
    pub halfloop_version: String,
    /// When collection started (RFC 3339)
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
            halfloop_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }
}

/// Complete diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        Self { metadata, events }
    }
}
