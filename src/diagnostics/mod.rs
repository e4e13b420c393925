// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording playback activity.
//!
//! Transport commands, controller transitions and playback failures are
//! captured as diagnostic events, stored in a memory-bounded circular buffer
//! and exportable as a JSON report. A kiosk operator can ship that report
//! when "the video doesn't start".
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer, drains the channel
//! - [`DiagnosticsHandle`]: Cheap, cloneable, non-blocking sender

mod buffer;
mod collector;
mod events;
mod export;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, PlaybackStateEvent, UserAction};
pub use export::write_atomic;
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
