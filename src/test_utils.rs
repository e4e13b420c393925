// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros; playback positions are `f64`
//! and the mirror formula accumulates rounding error.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for positions that should be "exactly equal".
pub const POSITION_EPSILON: f64 = 1e-9;
