// SPDX-License-Identifier: MPL-2.0
//! Keyboard input mapping.
//!
//! The kiosk reads keys as text tokens from the terminal, one per line.

use crate::video_player::TransportCommand;

/// A key the kiosk reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Space,
    Quit,
}

/// Parses a terminal token into a key.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// `f` and `r` are shorthands for the forward and rewind arrows.
#[must_use]
pub fn parse_token(token: &str) -> Option<Key> {
    match token.trim().to_ascii_lowercase().as_str() {
        "up" | "f" => Some(Key::ArrowUp),
        "down" | "r" => Some(Key::ArrowDown),
        "space" | "p" => Some(Key::Space),
        "q" | "quit" => Some(Key::Quit),
        _ => None,
    }
}

impl Key {
    /// The transport command bound to this key, if any.
    #[must_use]
    pub fn command(self) -> Option<TransportCommand> {
        match self {
            Key::ArrowUp => Some(TransportCommand::StepForward),
            Key::ArrowDown => Some(TransportCommand::StepBackward),
            Key::Space => Some(TransportCommand::TogglePlay),
            Key::Quit => None,
        }
    }
}
