// SPDX-License-Identifier: MPL-2.0
//! Half-loop playback engine for the kiosk.
//!
//! This module provides the controller that turns transport commands into
//! seeks and play/pause requests on a media source, and keeps the mirrored
//! half-loop consistent.

mod command;
mod state;

pub use command::TransportCommand;
pub use state::HalfLoopController;

use crate::application::port::{MediaSource, UiSurface};
use crate::config::HalfLoopSettings;

/// Creates and initializes a controller for the given collaborators.
pub fn create_controller<M: MediaSource, U: UiSurface>(
    media: M,
    surface: U,
    settings: HalfLoopSettings,
) -> HalfLoopController<M, U> {
    let mut controller = HalfLoopController::new(media, surface, settings);
    controller.initialize();
    controller
}
