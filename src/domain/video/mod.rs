// SPDX-License-Identifier: MPL-2.0
//! Half-loop playback domain types.
//!
//! This module contains the value objects and rules of the mirrored
//! half-loop, independent of any media backend or presentation concern.

pub mod newtypes;
pub mod playback;
pub mod readiness;

// Re-export commonly used types
pub use newtypes::{axis_bounds, AxisRatio};
pub use playback::{mirror, Direction, PlaybackState, StepOutcome};
pub use readiness::{ClipBounds, ReadyState, Readiness};
