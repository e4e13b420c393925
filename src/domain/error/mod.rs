// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Errors raised by the playback domain. They carry no dependency on the
//! media backend or the UI toolkit that surfaces them.

use std::fmt;

/// Why a transport command or a play request did not take effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The media source has not reported a usable duration yet.
    ///
    /// Commands issued in this state are dropped without touching the
    /// playback state. Callers normally treat this as a silent no-op.
    MediaNotReady,

    /// The media source refused to start playback (autoplay policy,
    /// element not ready, decoder failure).
    PlaybackRejected(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::MediaNotReady => write!(f, "Media is not ready"),
            PlaybackError::PlaybackRejected(reason) => {
                write!(f, "Playback rejected: {}", reason)
            }
        }
    }
}
