// SPDX-License-Identifier: MPL-2.0
//! Half-loop playback state.
//!
//! The clip is authored as two halves joined at the midpoint. "Forward" and
//! "backward" are logical labels: the element always plays forward in time,
//! and a change of direction jumps to the position mirrored across the
//! midpoint so the picture continues without a visible cut.

use super::readiness::ClipBounds;

/// Logical playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Playing the first half, towards the midpoint.
    #[default]
    Forward,
    /// Playing the second half, which reads as the first half reversed.
    Backward,
}

impl Direction {
    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Lowercase label used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Returns the position equidistant from `midpoint` on the other side.
///
/// The formula is self-inverse: `mirror(mirror(p, m), m) == p`.
#[inline]
#[must_use]
pub fn mirror(position_secs: f64, midpoint_secs: f64) -> f64 {
    2.0 * midpoint_secs - position_secs
}

/// How a step command resolved against the current direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Same direction requested: resume from the current position.
    Continued { resume_at: f64 },
    /// Direction changed: resume from the mirrored position.
    Flipped { from: f64, resume_at: f64 },
}

impl StepOutcome {
    /// Returns the position playback resumes from.
    #[must_use]
    pub fn resume_at(self) -> f64 {
        match self {
            Self::Continued { resume_at } | Self::Flipped { resume_at, .. } => resume_at,
        }
    }

    #[must_use]
    pub fn is_flip(self) -> bool {
        matches!(self, Self::Flipped { .. })
    }
}

/// Playback state owned by a single controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    /// Logical direction of the current segment.
    pub direction: Direction,
    /// Mirrors the media source's confirmed `playing`/`pause` events.
    pub is_playing: bool,
    /// Midpoint of the clip in seconds; 0 until the source is ready.
    pub midpoint: f64,
    /// Position the next play or transition command seeks to.
    pub resume_at: f64,
}

impl PlaybackState {
    /// Creates the initial state: forward, paused, at the start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a step in `requested` direction from `position_secs`.
    ///
    /// Stepping in the current direction keeps the position. Stepping the
    /// other way mirrors it across the midpoint and flips the direction.
    /// The returned resume position is always inside the clip.
    pub fn step(
        &mut self,
        requested: Direction,
        position_secs: f64,
        clip: &ClipBounds,
    ) -> StepOutcome {
        let outcome = if self.direction == requested {
            StepOutcome::Continued {
                resume_at: clip.clamp(position_secs),
            }
        } else {
            self.direction = requested;
            StepOutcome::Flipped {
                from: position_secs,
                resume_at: clip.clamp(mirror(position_secs, clip.midpoint)),
            }
        };
        self.resume_at = outcome.resume_at();
        outcome
    }

    /// Returns true when forward playback has run past `boundary_secs`.
    #[must_use]
    pub fn overruns(&self, position_secs: f64, boundary_secs: f64) -> bool {
        self.direction.is_forward() && position_secs > boundary_secs
    }

    /// Returns to the start of the first half after the clip ends.
    pub fn reset(&mut self) {
        self.direction = Direction::Forward;
        self.resume_at = 0.0;
    }
}
