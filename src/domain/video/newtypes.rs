// SPDX-License-Identifier: MPL-2.0
//! Video newtypes.
//!
//! Type-safe wrappers for the fractions that position the mirror axis and
//! the forward boundary inside a clip.

// =============================================================================
// Axis Bounds
// =============================================================================

/// Bounds for a position expressed as a fraction of the clip duration.
pub mod axis_bounds {
    /// Start of the clip.
    pub const MIN: f64 = 0.0;
    /// End of the clip.
    pub const MAX: f64 = 1.0;
    /// Half-loop clips are authored as two equal halves.
    pub const DEFAULT: f64 = 0.5;
}

// =============================================================================
// AxisRatio
// =============================================================================

/// A point in the clip expressed as a fraction of its duration (0.0–1.0).
///
/// Used for the mirror axis (where the two authored halves meet) and for the
/// forward boundary (where forward playback is clamped).
///
/// # Example
///
/// ```
/// use halfloop::domain::video::AxisRatio;
///
/// let axis = AxisRatio::default();
/// assert_eq!(axis.at(10.0), 5.0);
///
/// // Values outside the clip are clamped
/// assert_eq!(AxisRatio::new(1.7).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRatio(f64);

impl AxisRatio {
    /// Creates a ratio, clamping to the valid range.
    ///
    /// `NaN` falls back to the default axis.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(axis_bounds::MIN, axis_bounds::MAX))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the timestamp this ratio designates in a clip of `duration_secs`.
    #[must_use]
    pub fn at(self, duration_secs: f64) -> f64 {
        duration_secs * self.0
    }
}

impl Default for AxisRatio {
    fn default() -> Self {
        Self(axis_bounds::DEFAULT)
    }
}
