// SPDX-License-Identifier: MPL-2.0
//! Media readiness.
//!
//! A media source reports an HTML-style ready state. The controller enters
//! [`Readiness::Ready`] exactly once, when the ready state reaches the
//! configured threshold and the duration is known, and freezes the clip
//! geometry at that moment.

use super::newtypes::AxisRatio;

/// Ready state ordinal of a media element, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum ReadyState {
    /// Nothing is known about the resource.
    #[default]
    HaveNothing,
    /// Duration and dimensions are known.
    HaveMetadata,
    /// Data for the current position is available.
    HaveCurrentData,
    /// Data beyond the current position is available.
    HaveFutureData,
    /// Enough data to play through.
    HaveEnoughData,
}

impl ReadyState {
    /// Converts an ordinal, saturating values above 4.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            _ => Self::HaveEnoughData,
        }
    }
}

/// Clip geometry, fixed when the media source becomes ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    /// Clip duration in seconds.
    pub duration: f64,
    /// Axis the mirror formula reflects across.
    pub midpoint: f64,
    /// Forward playback is clamped to this position.
    pub boundary: f64,
}

impl ClipBounds {
    /// Derives the geometry of a clip of `duration_secs`.
    #[must_use]
    pub fn new(duration_secs: f64, axis: AxisRatio, boundary: AxisRatio) -> Self {
        let duration = duration_secs.max(0.0);
        Self {
            duration,
            midpoint: axis.at(duration),
            boundary: boundary.at(duration),
        }
    }

    /// Clamps a position into `[0, duration]`.
    #[must_use]
    pub fn clamp(&self, position_secs: f64) -> f64 {
        position_secs.max(0.0).min(self.duration)
    }
}

/// Whether the controller can act on transport commands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Readiness {
    /// Duration unknown; commands are dropped.
    #[default]
    Pending,
    /// Duration known; geometry frozen.
    Ready(ClipBounds),
}

impl Readiness {
    /// Attempts the one-time transition into [`Readiness::Ready`].
    ///
    /// Returns the new geometry when the transition happens now, `None` when
    /// already ready or still missing data. A duration that is not finite and
    /// positive (live streams, unknown length) never qualifies.
    pub fn try_enter(
        &mut self,
        ready_state: ReadyState,
        threshold: ReadyState,
        duration_secs: Option<f64>,
        axis: AxisRatio,
        boundary: AxisRatio,
    ) -> Option<ClipBounds> {
        if self.is_ready() || ready_state < threshold {
            return None;
        }
        let duration = duration_secs.filter(|d| d.is_finite() && *d > 0.0)?;
        let clip = ClipBounds::new(duration, axis, boundary);
        *self = Self::Ready(clip);
        Some(clip)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns the clip geometry once ready.
    #[must_use]
    pub fn clip(&self) -> Option<&ClipBounds> {
        match self {
            Self::Ready(clip) => Some(clip),
            Self::Pending => None,
        }
    }
}
