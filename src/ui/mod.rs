// SPDX-License-Identifier: MPL-2.0
//! User interface adapters for the kiosk terminal.
//!
//! - [`surface`]: control panel implementing the `UiSurface` port
//! - [`keyboard`]: key tokens and their transport bindings

pub mod keyboard;
pub mod surface;

pub use keyboard::{parse_token, Key};
pub use surface::ControlPanel;
