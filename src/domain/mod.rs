// SPDX-License-Identifier: MPL-2.0
//! Domain layer - playback rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends only on `std` so the half-loop rules can be tested without a
//! media backend or a UI.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`PlaybackError`](error::PlaybackError))
//! - [`video`]: Half-loop playback types ([`PlaybackState`](video::PlaybackState),
//!   [`Direction`](video::Direction), [`Readiness`](video::Readiness),
//!   [`AxisRatio`](video::AxisRatio))

pub mod diagnostics;
pub mod error;
pub mod video;
