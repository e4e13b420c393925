// SPDX-License-Identifier: MPL-2.0
//! UI surface port definition.
//!
//! The controller drives a fixed set of named controls. How they are drawn
//! (DOM buttons, terminal glyphs, a GPU overlay) is up to the adapter.

use std::fmt;

/// Clickable transport controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    PlayButton,
    ForwardButton,
    RewindButton,
}

impl Control {
    pub const ALL: [Control; 3] = [
        Control::PlayButton,
        Control::ForwardButton,
        Control::RewindButton,
    ];
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::PlayButton => write!(f, "play"),
            Control::ForwardButton => write!(f, "forward"),
            Control::RewindButton => write!(f, "rewind"),
        }
    }
}

/// Show/hide indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Shown while paused; clicking play starts playback.
    PlayIcon,
    /// Shown while playing.
    PauseIcon,
    /// Buffering spinner.
    Loading,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::PlayIcon, Indicator::PauseIcon, Indicator::Loading];
}

/// Port for the controls reflecting playback state.
pub trait UiSurface {
    /// Enables or disables a control.
    fn set_enabled(&mut self, control: Control, enabled: bool);

    /// Shows or hides an indicator.
    fn set_visible(&mut self, indicator: Indicator, visible: bool);
}
