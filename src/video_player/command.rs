// SPDX-License-Identifier: MPL-2.0
//! Transport commands.
//!
//! Every input adapter (buttons, keyboard, scripted playlists) funnels into
//! these three commands, so the controller never depends on where a click
//! came from.

use crate::diagnostics::UserAction;

/// A command issued to the half-loop controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportCommand {
    /// Pause when playing, play otherwise.
    TogglePlay,
    /// Continue forward, or flip from backward to forward.
    StepForward,
    /// Continue backward, or flip from forward to backward.
    StepBackward,
}

impl From<TransportCommand> for UserAction {
    fn from(command: TransportCommand) -> Self {
        match command {
            TransportCommand::TogglePlay => UserAction::TogglePlayback,
            TransportCommand::StepForward => UserAction::StepForward,
            TransportCommand::StepBackward => UserAction::StepBackward,
        }
    }
}
