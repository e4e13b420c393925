// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events describe what the visitor did, how the controller reacted and
//! what went wrong, so a report can be read as a timeline.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Transport commands issued from any input adapter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    /// Play button or space bar.
    TogglePlayback,
    /// Forward button or arrow up.
    StepForward,
    /// Rewind button or arrow down.
    StepBackward,
}

/// Controller transitions worth keeping in a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlaybackStateEvent {
    /// The media source reported a usable duration.
    MediaReady {
        duration_secs: f64,
        midpoint_secs: f64,
    },
    /// A step command changed direction and jumped across the midpoint.
    DirectionFlipped {
        /// New direction (`forward` or `backward`).
        direction: String,
        from_secs: f64,
        to_secs: f64,
    },
    /// Forward playback ran past the boundary and was pulled back.
    BoundaryClamped {
        position_secs: f64,
        boundary_secs: f64,
    },
    /// The clip played to its end and the controller reset.
    ClipEnded,
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic capture time, for offsets in reports.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped now.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A transport command, accepted or not.
    UserAction {
        action: UserAction,
        /// Optional context (e.g. `ignored: media not ready`).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// A controller transition.
    StateChange { state: PlaybackStateEvent },

    /// Something odd that did not stop playback.
    Warning { message: String },

    /// Playback failed to start or continue.
    Error { message: String },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
