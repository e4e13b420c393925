// SPDX-License-Identifier: MPL-2.0
//! Kiosk messages and runtime flags.

use std::path::PathBuf;

use crate::application::port::Control;
use crate::config::DEFAULT_CLIP_DURATION_SECS;
use crate::ui::{parse_token, Key};

/// Messages consumed by `Kiosk::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key pressed on the terminal.
    Key(Key),
    /// A click on one of the panel buttons.
    Click(Control),
    /// The media clock should advance by one tick.
    Tick,
    /// Standard input reached its end.
    InputClosed,
}

impl Message {
    /// Parses one line of terminal input.
    ///
    /// Button names (`play`, `forward`, `rewind`) click the panel; anything
    /// else is read as a key token.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "play" => Some(Message::Click(Control::PlayButton)),
            "forward" => Some(Message::Click(Control::ForwardButton)),
            "rewind" => Some(Message::Click(Control::RewindButton)),
            other => parse_token(other).map(Message::Key),
        }
    }
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    /// Length of the simulated clip in seconds.
    pub duration_secs: f64,
    /// Overrides the configured tick interval.
    pub tick_ms: Option<u64>,
    /// Settings file to use instead of the default location.
    pub config_path: Option<PathBuf>,
    /// Refuse play requests, as a browser does without a user gesture.
    pub block_autoplay: bool,
    /// Where to write the diagnostics report on exit.
    pub report_path: Option<PathBuf>,
    /// Persist the effective settings before starting.
    pub save_config: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_CLIP_DURATION_SECS,
            tick_ms: None,
            config_path: None,
            block_autoplay: false,
            report_path: None,
            save_config: false,
        }
    }
}
