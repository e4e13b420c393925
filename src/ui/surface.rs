// SPDX-License-Identifier: MPL-2.0
//! Terminal control panel implementing the [`UiSurface`] port.

use std::collections::HashMap;

use crate::application::port::{Control, Indicator, UiSurface};
use crate::video_player::TransportCommand;

/// Enabled flags and indicator visibility, rendered as one status line.
///
/// Everything starts enabled and visible, like freshly parsed markup; the
/// controller's `initialize` establishes the real starting layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    enabled: HashMap<Control, bool>,
    visible: HashMap<Indicator, bool>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            enabled: Control::ALL.iter().map(|&c| (c, true)).collect(),
            visible: Indicator::ALL.iter().map(|&i| (i, true)).collect(),
        }
    }
}

impl ControlPanel {
    #[must_use]
    pub fn is_enabled(&self, control: Control) -> bool {
        self.enabled.get(&control).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn is_visible(&self, indicator: Indicator) -> bool {
        self.visible.get(&indicator).copied().unwrap_or(true)
    }

    /// Returns the command a click on `control` issues, or `None` when the
    /// control is disabled.
    #[must_use]
    pub fn click(&self, control: Control) -> Option<TransportCommand> {
        if !self.is_enabled(control) {
            log::debug!("Ignoring click on disabled {control} button");
            return None;
        }
        Some(match control {
            Control::PlayButton => TransportCommand::TogglePlay,
            Control::ForwardButton => TransportCommand::StepForward,
            Control::RewindButton => TransportCommand::StepBackward,
        })
    }

    /// Renders the panel, e.g. `[ ▶ ] [>> ] [<< ]  loading`.
    ///
    /// Disabled buttons render as dashes.
    #[must_use]
    pub fn status_line(&self) -> String {
        let play_glyph = if self.is_visible(Indicator::PauseIcon) {
            "⏸"
        } else if self.is_visible(Indicator::PlayIcon) {
            "▶"
        } else {
            " "
        };

        let mut line = button(play_glyph, self.is_enabled(Control::PlayButton));
        line.push(' ');
        line.push_str(&button(">>", self.is_enabled(Control::ForwardButton)));
        line.push(' ');
        line.push_str(&button("<<", self.is_enabled(Control::RewindButton)));
        if self.is_visible(Indicator::Loading) {
            line.push_str("  loading");
        }
        line
    }
}

fn button(glyph: &str, enabled: bool) -> String {
    if enabled {
        format!("[{glyph:^3}]")
    } else {
        "[---]".to_string()
    }
}

impl UiSurface for ControlPanel {
    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.enabled.insert(control, enabled);
    }

    fn set_visible(&mut self, indicator: Indicator, visible: bool) {
        self.visible.insert(indicator, visible);
    }
}
