// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the controller depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The application layer depends on the domain layer (uses domain types)
//! - Infrastructure implements the ports (simulated media element)
//! - Presentation implements the ports it drives (control panel)
//!
//! # Example
//!
//! ```ignore
//! use halfloop::application::port::{MediaSource, UiSurface};
//!
//! struct BrowserVideo { /* ... */ }
//! impl MediaSource for BrowserVideo { /* ... */ }
//! ```

pub mod port;
