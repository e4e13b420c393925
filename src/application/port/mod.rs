// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The half-loop controller never talks to a concrete media element or a
//! concrete widget toolkit. It consumes a [`MediaSource`] and drives a
//! [`UiSurface`]; adapters implement both.
//!
//! # Available Ports
//!
//! - [`media`]: The media element being played and the events it emits
//! - [`surface`]: The buttons and indicators reflecting playback state
//!
//! # Design Notes
//!
//! - Traits use domain types only
//! - No `async fn`: play outcomes arrive later as [`MediaEvent`]s
//! - Everything runs on one thread, so no `Send`/`Sync` bounds

pub mod media;
pub mod surface;

// Re-export main types for convenience
pub use media::{MediaEvent, MediaSource};
pub use surface::{Control, Indicator, UiSurface};
