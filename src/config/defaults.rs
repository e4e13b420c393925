// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Half-loop**: Mirror axis and forward boundary
//! - **Readiness**: Ready state required before commands take effect
//! - **Kiosk**: Event loop tick
//! - **Diagnostics**: Event buffer size

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::video::axis_bounds;

// ==========================================================================
// Half-loop Defaults
// ==========================================================================

/// Fraction of the clip where the two authored halves meet.
pub const DEFAULT_MIRROR_AXIS: f64 = axis_bounds::DEFAULT;

/// Whether the media source is reloaded after the clip ends.
pub const DEFAULT_RELOAD_ON_ENDED: bool = true;

// ==========================================================================
// Readiness Defaults
// ==========================================================================

/// Ready state ordinal required before transport commands act
/// (2 = current frame available).
pub const DEFAULT_READY_THRESHOLD: u8 = 2;

/// Highest ready state ordinal.
pub const MAX_READY_THRESHOLD: u8 = 4;

// ==========================================================================
// Kiosk Defaults
// ==========================================================================

/// Interval between media clock ticks, in milliseconds. Browsers fire
/// `timeupdate` every 15–250 ms.
pub const DEFAULT_TICK_MS: u64 = 250;

pub const MIN_TICK_MS: u64 = 15;

pub const MAX_TICK_MS: u64 = 1000;

/// Length of the simulated clip when none is given, in seconds.
pub const DEFAULT_CLIP_DURATION_SECS: f64 = 10.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MIRROR_AXIS > axis_bounds::MIN);
    assert!(DEFAULT_MIRROR_AXIS < axis_bounds::MAX);

    assert!(DEFAULT_READY_THRESHOLD <= MAX_READY_THRESHOLD);

    assert!(MIN_TICK_MS > 0);
    assert!(DEFAULT_TICK_MS >= MIN_TICK_MS);
    assert!(DEFAULT_TICK_MS <= MAX_TICK_MS);

    assert!(DEFAULT_CLIP_DURATION_SECS > 0.0);

    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= buffer_capacity_bounds::MIN);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= buffer_capacity_bounds::MAX);
};
