// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector.
//!
//! The collector owns the event buffer. Everything else logs through a
//! [`DiagnosticsHandle`], which never blocks the event loop.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    write_atomic, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, PlaybackStateEvent, ReportMetadata, SerializableEvent, UserAction,
};
use crate::error::{Error, Result};

/// Channel depth between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends are non-blocking; when the channel is full the
/// event is dropped rather than stalling playback.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a transport command.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a transport command with context.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    /// Logs a controller transition.
    pub fn log_state(&self, state: PlaybackStateEvent) {
        self.send(DiagnosticEventKind::StateChange { state });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    /// Sends an event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is saturated, or
    /// `TrySendError::Disconnected` once the collector has been dropped.
    pub fn try_send(
        &self,
        kind: DiagnosticEventKind,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Dropped when full or disconnected
        let _ = self.try_send(kind);
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Call once per tick of the event loop.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of stored error events.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.buffer.iter().filter(|e| e.kind.is_error()).count()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path`.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self
            .export_json()
            .map_err(|e| Error::Io(format!("failed to serialize report: {}", e)))?;
        write_atomic(path, &json)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
