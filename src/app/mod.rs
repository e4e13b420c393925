// SPDX-License-Identifier: MPL-2.0
//! Kiosk driver wiring the half-loop controller to the terminal.
//!
//! The `Kiosk` struct owns the controller, its simulated media element and
//! control panel, plus the diagnostics collector. Terminal lines and clock
//! ticks are turned into [`Message`]s and fed to a single update entrypoint,
//! so the whole kiosk can be exercised without a terminal.

mod message;

pub use message::{Flags, Message};

use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use crate::application::port::MediaSource;
use crate::config::Config;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::error::PlaybackError;
use crate::error::Result;
use crate::infrastructure::SimulatedMedia;
use crate::ui::{ControlPanel, Key};
use crate::video_player::{create_controller, HalfLoopController, TransportCommand};

/// Clock ticks a freshly opened clip spends buffering before it can play.
const STARTUP_LOADING_TICKS: u32 = 4;

/// Whether the kiosk keeps running after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Root kiosk state.
pub struct Kiosk {
    controller: HalfLoopController<SimulatedMedia, ControlPanel>,
    diagnostics: DiagnosticsCollector,
    tick: Duration,
    last_status: Option<String>,
}

impl std::fmt::Debug for Kiosk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kiosk")
            .field("tick", &self.tick)
            .field("direction", &self.controller.direction())
            .field("is_playing", &self.controller.is_playing())
            .field("diagnostic_events", &self.diagnostics.len())
            .finish_non_exhaustive()
    }
}

impl Kiosk {
    /// Builds the kiosk from the loaded configuration and command line flags.
    #[must_use]
    pub fn new(config: &Config, flags: &Flags) -> Self {
        let mut config = config.clone();
        if flags.tick_ms.is_some() {
            config.tick_ms = flags.tick_ms;
        }

        let capacity = BufferCapacity::new(
            config
                .diagnostics_capacity
                .unwrap_or(crate::config::DEFAULT_DIAGNOSTICS_CAPACITY),
        );
        let diagnostics = DiagnosticsCollector::new(capacity);

        let media = SimulatedMedia::loading(flags.duration_secs, STARTUP_LOADING_TICKS)
            .with_autoplay_blocked(flags.block_autoplay);
        let controller = create_controller(
            media,
            ControlPanel::default(),
            config.half_loop_settings(),
        )
        .with_diagnostics(diagnostics.handle());

        let mut kiosk = Self {
            controller,
            diagnostics,
            tick: config.tick_interval(),
            last_status: None,
        };
        kiosk.pump_media_events();
        kiosk
    }

    /// Applies one message and returns whether to keep running.
    pub fn update(&mut self, message: Message) -> Flow {
        match message {
            Message::Key(Key::Quit) | Message::InputClosed => return Flow::Quit,
            Message::Key(key) => {
                if let Some(command) = key.command() {
                    self.run_command(command);
                }
            }
            Message::Click(control) => {
                if let Some(command) = self.controller.surface().click(control) {
                    self.run_command(command);
                }
            }
            Message::Tick => {
                let delta = self.tick.as_secs_f64();
                self.controller.media_mut().advance(delta);
            }
        }

        self.pump_media_events();
        self.diagnostics.process_pending();
        Flow::Continue
    }

    fn run_command(&mut self, command: TransportCommand) {
        match self.controller.dispatch(command) {
            Ok(()) => {}
            Err(PlaybackError::MediaNotReady) => {
                log::info!("Still loading, {command:?} ignored");
            }
            Err(err) => log::warn!("{command:?} failed: {err}"),
        }
    }

    /// Delivers queued media events until the media element goes quiet.
    ///
    /// Handlers can queue new events (a clamp seeks and pauses), so this
    /// loops rather than draining once.
    fn pump_media_events(&mut self) {
        loop {
            let events = self.controller.media_mut().drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.controller.handle_event(event);
            }
        }
    }

    /// Current status line: panel, playhead and direction.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "{}  {:6.2}s {}",
            self.controller.surface().status_line(),
            self.controller.media().current_time(),
            self.controller.direction().as_str()
        )
    }

    /// Returns the status line when it differs from the last one taken.
    pub fn take_status_change(&mut self) -> Option<String> {
        let status = self.status();
        if self.last_status.as_deref() == Some(status.as_str()) {
            return None;
        }
        self.last_status = Some(status.clone());
        Some(status)
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    #[must_use]
    pub fn controller(&self) -> &HalfLoopController<SimulatedMedia, ControlPanel> {
        &self.controller
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Flushes pending diagnostics and writes the JSON report.
    pub fn write_report(&mut self, path: &Path) -> Result<()> {
        self.diagnostics.process_pending();
        self.diagnostics.export_to_file(path)?;
        log::info!(
            "Diagnostics report written to {} ({} events)",
            path.display(),
            self.diagnostics.len()
        );
        Ok(())
    }
}

/// Runs the kiosk on a current-thread runtime until quit or end of input.
pub fn run(config: &Config, flags: &Flags) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut kiosk = Kiosk::new(config, flags);
    log::info!(
        "Kiosk started: {:.1}s clip, tick {}ms",
        flags.duration_secs,
        kiosk.tick().as_millis()
    );
    println!("keys: up/f forward, down/r rewind, space/p play-pause, q quit");

    runtime.block_on(event_loop(&mut kiosk, BufReader::new(tokio::io::stdin())))?;

    if let Some(path) = &flags.report_path {
        kiosk.write_report(path)?;
    }
    Ok(())
}

/// Selects between input lines and clock ticks, redrawing on change.
pub async fn event_loop<R>(kiosk: &mut Kiosk, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ticker = tokio::time::interval(kiosk.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let message = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match Message::from_line(&line) {
                    Some(message) => message,
                    None => {
                        log::debug!("Unrecognized input: {line:?}");
                        continue;
                    }
                },
                None => Message::InputClosed,
            },
            _ = ticker.tick() => Message::Tick,
        };

        if kiosk.update(message) == Flow::Quit {
            break;
        }
        if let Some(status) = kiosk.take_status_change() {
            println!("{status}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{Control, Indicator};
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::video::Direction;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    fn kiosk_with(flags: Flags) -> Kiosk {
        let config = Config {
            tick_ms: Some(250),
            ..Config::default()
        };
        Kiosk::new(&config, &flags)
    }

    fn loaded_kiosk(flags: Flags) -> Kiosk {
        let mut kiosk = kiosk_with(flags);
        for _ in 0..STARTUP_LOADING_TICKS {
            kiosk.update(Message::Tick);
        }
        kiosk
    }

    #[test]
    fn commands_while_loading_are_ignored() {
        let mut kiosk = kiosk_with(Flags::default());
        assert!(!kiosk.controller().is_ready());

        assert_eq!(kiosk.update(Message::Key(Key::Space)), Flow::Continue);

        assert!(!kiosk.controller().is_playing());
        assert_eq!(kiosk.controller().media().requests().play_requests, 0);
    }

    #[test]
    fn loading_ticks_make_the_kiosk_ready() {
        let kiosk = loaded_kiosk(Flags::default());
        assert!(kiosk.controller().is_ready());
        assert_abs_diff_eq!(kiosk.controller().midpoint(), 5.0);
    }

    #[test]
    fn play_then_ticks_advance_and_clamp_at_midpoint() {
        let mut kiosk = loaded_kiosk(Flags::default());

        kiosk.update(Message::Click(Control::PlayButton));
        assert!(kiosk.controller().is_playing());

        for _ in 0..30 {
            kiosk.update(Message::Tick);
        }

        assert_abs_diff_eq!(kiosk.controller().media().current_time(), 5.0);
        assert!(!kiosk.controller().is_playing());
        assert!(!kiosk
            .controller()
            .surface()
            .is_enabled(Control::ForwardButton));
    }

    #[test]
    fn rewind_click_mirrors_and_plays_to_the_end() {
        let mut kiosk = loaded_kiosk(Flags::default());
        kiosk.update(Message::Key(Key::Space));
        for _ in 0..12 {
            kiosk.update(Message::Tick);
        }
        assert_abs_diff_eq!(kiosk.controller().media().current_time(), 3.0);

        kiosk.update(Message::Click(Control::RewindButton));
        assert_eq!(kiosk.controller().direction(), Direction::Backward);
        assert_abs_diff_eq!(kiosk.controller().media().current_time(), 7.0);

        for _ in 0..12 {
            kiosk.update(Message::Tick);
        }

        // Ended resets to forward and reloads
        assert_eq!(kiosk.controller().direction(), Direction::Forward);
        assert!(!kiosk.controller().is_playing());
        assert_eq!(kiosk.controller().media().requests().loads, 1);
    }

    #[test]
    fn disabled_button_click_does_nothing() {
        let mut kiosk = loaded_kiosk(Flags::default());
        assert!(!kiosk
            .controller()
            .surface()
            .is_enabled(Control::RewindButton));

        kiosk.update(Message::Click(Control::RewindButton));

        assert_eq!(kiosk.controller().direction(), Direction::Forward);
        assert_eq!(kiosk.controller().media().requests().play_requests, 0);
    }

    #[test]
    fn blocked_autoplay_records_one_error() {
        let mut kiosk = loaded_kiosk(Flags {
            block_autoplay: true,
            ..Flags::default()
        });

        kiosk.update(Message::Key(Key::Space));

        assert!(!kiosk.controller().is_playing());
        assert!(kiosk.controller().surface().is_visible(Indicator::PlayIcon));
        assert_eq!(kiosk.diagnostics().error_count(), 1);
    }

    #[test]
    fn quit_and_end_of_input_stop_the_kiosk() {
        let mut kiosk = kiosk_with(Flags::default());
        assert_eq!(kiosk.update(Message::Key(Key::Quit)), Flow::Quit);
        assert_eq!(kiosk.update(Message::InputClosed), Flow::Quit);
    }

    #[test]
    fn status_changes_are_reported_once() {
        let mut kiosk = kiosk_with(Flags::default());
        assert!(kiosk.take_status_change().is_some());
        assert!(kiosk.take_status_change().is_none());
    }

    #[test]
    fn tick_flag_overrides_config() {
        let kiosk = kiosk_with(Flags {
            tick_ms: Some(40),
            ..Flags::default()
        });
        assert_eq!(kiosk.tick(), Duration::from_millis(40));
    }

    #[test]
    fn report_contains_recorded_actions() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        let mut kiosk = loaded_kiosk(Flags::default());
        kiosk.update(Message::Key(Key::Space));

        kiosk.write_report(&path).expect("report written");

        let content = std::fs::read_to_string(&path).expect("report readable");
        let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
        assert!(report["events"].as_array().is_some_and(|e| !e.is_empty()));
        assert!(kiosk
            .diagnostics()
            .iter()
            .any(|e| matches!(e.kind, DiagnosticEventKind::UserAction { .. })));
    }

    #[tokio::test]
    async fn event_loop_stops_on_quit_token() {
        let mut kiosk = kiosk_with(Flags {
            tick_ms: Some(15),
            ..Flags::default()
        });

        event_loop(&mut kiosk, &b"up\nq\n"[..])
            .await
            .expect("loop finishes");

        assert!(!kiosk.controller().is_playing());
    }
}
