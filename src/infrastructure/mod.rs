// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: Deterministic media element (implements [`MediaSource`])
//!
//! [`MediaSource`]: crate::application::port::MediaSource

pub mod simulated;

pub use simulated::{RequestLog, SimulatedMedia};
