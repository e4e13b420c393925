// SPDX-License-Identifier: MPL-2.0
//! Half-loop playback controller.
//!
//! Translates transport commands into seeks and play/pause requests on a
//! [`MediaSource`] and keeps the [`PlaybackState`] consistent:
//! - Forward playback never runs past the forward boundary
//! - Changing direction jumps to the position mirrored across the midpoint
//! - `is_playing` follows the media source's own `playing`/`pause` events,
//!   never the requests
//! - Commands issued before the media source is ready are dropped

use crate::application::port::{Control, Indicator, MediaEvent, MediaSource, UiSurface};
use crate::config::HalfLoopSettings;
use crate::diagnostics::{DiagnosticsHandle, PlaybackStateEvent, UserAction};
use crate::domain::error::PlaybackError;
use crate::domain::video::{ClipBounds, Direction, PlaybackState, Readiness, StepOutcome};

use super::TransportCommand;

/// Positions closer than this are treated as the same frame.
const POSITION_TOLERANCE_SECS: f64 = 1e-6;

/// Controller for one media source and one control surface.
///
/// The controller owns both collaborators; the event loop reaches them
/// through [`media_mut`](Self::media_mut) to advance time and drain events.
pub struct HalfLoopController<M, U> {
    media: M,
    surface: U,
    state: PlaybackState,
    readiness: Readiness,
    settings: HalfLoopSettings,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<M: MediaSource, U: UiSurface> HalfLoopController<M, U> {
    /// Creates a controller. Call [`initialize`](Self::initialize) before use.
    pub fn new(media: M, surface: U, settings: HalfLoopSettings) -> Self {
        Self {
            media,
            surface,
            state: PlaybackState::new(),
            readiness: Readiness::Pending,
            settings,
            diagnostics: None,
        }
    }

    /// Attaches a diagnostics handle.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Rewinds the media source and puts the controls in their initial state.
    ///
    /// Also attempts the readiness transition; when the media source is still
    /// loading, commands stay no-ops until it reports a duration.
    pub fn initialize(&mut self) {
        self.state = PlaybackState::new();
        self.media.set_current_time(0.0);

        self.surface.set_visible(Indicator::PauseIcon, false);
        self.surface.set_visible(Indicator::PlayIcon, true);
        self.surface.set_visible(Indicator::Loading, false);
        self.reset_step_controls();

        self.refresh_readiness();
    }

    // =========================================================================
    // Transport commands
    // =========================================================================

    /// Runs a command from any input adapter.
    pub fn dispatch(&mut self, command: TransportCommand) -> Result<(), PlaybackError> {
        match command {
            TransportCommand::TogglePlay => self.toggle_play(),
            TransportCommand::StepForward => self.step_forward().map(|_| ()),
            TransportCommand::StepBackward => self.step_backward().map(|_| ()),
        }
    }

    /// Pauses when playing, otherwise requests play from where the media sits.
    ///
    /// The play/pause icons only change once the media source confirms.
    pub fn toggle_play(&mut self) -> Result<(), PlaybackError> {
        let action = UserAction::from(TransportCommand::TogglePlay);
        let clip = self.require_ready(action)?;
        self.log_action(action);

        if self.state.is_playing {
            log::debug!("Pause requested at {:.3}s", self.media.current_time());
            self.media.pause();
            return Ok(());
        }

        self.state.resume_at = clip.clamp(self.media.current_time());
        self.show_step_controls_for(self.state.direction);
        log::debug!(
            "Play requested at {:.3}s ({})",
            self.state.resume_at,
            self.state.direction.as_str()
        );
        self.media.request_play();
        Ok(())
    }

    /// Continues forward, or flips from backward to the mirrored position.
    pub fn step_forward(&mut self) -> Result<StepOutcome, PlaybackError> {
        self.step(Direction::Forward, TransportCommand::StepForward)
    }

    /// Continues backward, or flips from forward to the mirrored position.
    pub fn step_backward(&mut self) -> Result<StepOutcome, PlaybackError> {
        self.step(Direction::Backward, TransportCommand::StepBackward)
    }

    fn step(
        &mut self,
        requested: Direction,
        command: TransportCommand,
    ) -> Result<StepOutcome, PlaybackError> {
        let action = UserAction::from(command);
        let clip = self.require_ready(action)?;
        self.log_action(action);

        let position = self.media.current_time();
        let outcome = self.state.step(requested, position, &clip);

        if let StepOutcome::Flipped { from, resume_at } = outcome {
            log::debug!(
                "Direction flipped to {}: {:.3}s -> {:.3}s",
                requested.as_str(),
                from,
                resume_at
            );
            self.log_state(PlaybackStateEvent::DirectionFlipped {
                direction: requested.as_str().to_string(),
                from_secs: from,
                to_secs: resume_at,
            });
        }

        self.show_step_controls_for(requested);
        self.media.set_current_time(outcome.resume_at());
        self.media.request_play();
        Ok(outcome)
    }

    // =========================================================================
    // Media events
    // =========================================================================

    /// Routes a media event to its handler.
    pub fn handle_event(&mut self, event: MediaEvent) {
        log::trace!("Media event: {}", event.name());
        match event {
            MediaEvent::TimeUpdate => {
                self.on_time_update();
            }
            MediaEvent::Playing => self.on_playing(),
            MediaEvent::Pause => self.on_pause(),
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::Waiting => self.on_waiting(),
            MediaEvent::LoadedMetadata => self.on_media_ready(),
            MediaEvent::PlayRejected { reason } => self.on_play_rejected(&reason),
        }
    }

    /// Clamps forward playback that ran past the boundary.
    ///
    /// Returns true when a clamp happened. Backward playback is never
    /// clamped at the start of the clip.
    pub fn on_time_update(&mut self) -> bool {
        let Some(clip) = self.readiness.clip().copied() else {
            return false;
        };

        let position = self.media.current_time();
        if !self.state.overruns(position, clip.boundary) {
            return false;
        }

        log::debug!(
            "Forward playback clamped: {:.3}s -> {:.3}s",
            position,
            clip.boundary
        );
        self.surface.set_enabled(Control::ForwardButton, false);
        self.media.set_current_time(clip.boundary);
        self.media.pause();
        self.log_state(PlaybackStateEvent::BoundaryClamped {
            position_secs: position,
            boundary_secs: clip.boundary,
        });
        true
    }

    /// The media source confirmed playback.
    pub fn on_playing(&mut self) {
        self.state.is_playing = true;
        self.surface.set_visible(Indicator::PauseIcon, true);
        self.surface.set_visible(Indicator::PlayIcon, false);
        self.surface.set_visible(Indicator::Loading, false);
    }

    /// The media source confirmed a pause.
    pub fn on_pause(&mut self) {
        self.state.is_playing = false;
        self.surface.set_visible(Indicator::PauseIcon, false);
        self.surface.set_visible(Indicator::PlayIcon, true);
    }

    /// Shows the loading indicator unless the media is parked at the boundary.
    pub fn on_waiting(&mut self) {
        let position = self.media.current_time();
        let parked = self
            .readiness
            .clip()
            .is_some_and(|clip| (position - clip.boundary).abs() < POSITION_TOLERANCE_SECS);
        self.surface.set_visible(Indicator::Loading, !parked);

        if !parked {
            log::debug!("Buffering at {:.3}s", position);
            if let Some(handle) = &self.diagnostics {
                handle.log_warning(format!("Buffering at {position:.3}s"));
            }
        }
    }

    /// The clip played to its end: back to forward, at the start, paused.
    ///
    /// Without a reload the playhead returns to the start, so it never
    /// sits past the boundary while Forward.
    pub fn on_ended(&mut self) {
        log::info!("Clip ended, resetting to forward");
        self.state.reset();
        self.on_pause();
        self.reset_step_controls();
        self.log_state(PlaybackStateEvent::ClipEnded);

        if self.settings.reload_on_ended {
            self.media.load();
        } else {
            self.media.set_current_time(self.state.resume_at);
        }
    }

    /// A play request was refused. Logged once, never retried.
    pub fn on_play_rejected(&mut self, reason: &str) {
        log::warn!("Play request rejected: {}", reason);
        if let Some(handle) = &self.diagnostics {
            handle.log_error(PlaybackError::PlaybackRejected(reason.to_string()).to_string());
        }
    }

    /// Metadata arrived; attempts the readiness transition.
    pub fn on_media_ready(&mut self) {
        self.refresh_readiness();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn midpoint(&self) -> f64 {
        self.state.midpoint
    }

    pub fn resume_at(&self) -> f64 {
        self.state.resume_at
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    /// Clip geometry, once ready.
    pub fn clip(&self) -> Option<&ClipBounds> {
        self.readiness.clip()
    }

    pub fn settings(&self) -> &HalfLoopSettings {
        &self.settings
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Returns the clip geometry, entering the ready state first if possible.
    fn require_ready(&mut self, action: UserAction) -> Result<ClipBounds, PlaybackError> {
        self.refresh_readiness();
        match self.readiness.clip() {
            Some(clip) => Ok(*clip),
            None => {
                log::debug!("Ignoring {:?}: media not ready", action);
                if let Some(handle) = &self.diagnostics {
                    handle.log_action_with_details(
                        action,
                        Some("ignored: media not ready".to_string()),
                    );
                }
                Err(PlaybackError::MediaNotReady)
            }
        }
    }

    fn refresh_readiness(&mut self) {
        let entered = self.readiness.try_enter(
            self.media.ready_state(),
            self.settings.ready_threshold,
            self.media.duration(),
            self.settings.mirror_axis,
            self.settings.forward_boundary,
        );

        if let Some(clip) = entered {
            self.state.midpoint = clip.midpoint;
            log::info!(
                "Media ready: duration {:.3}s, midpoint {:.3}s, boundary {:.3}s",
                clip.duration,
                clip.midpoint,
                clip.boundary
            );
            self.log_state(PlaybackStateEvent::MediaReady {
                duration_secs: clip.duration,
                midpoint_secs: clip.midpoint,
            });
        }
    }

    /// Disables the step button for the direction being played.
    fn show_step_controls_for(&mut self, direction: Direction) {
        let forward = direction.is_forward();
        self.surface.set_enabled(Control::ForwardButton, !forward);
        self.surface.set_enabled(Control::RewindButton, forward);
    }

    fn reset_step_controls(&mut self) {
        self.surface.set_enabled(Control::ForwardButton, true);
        self.surface.set_enabled(Control::RewindButton, false);
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_state(&self, state: PlaybackStateEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_state(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::domain::video::{AxisRatio, ReadyState};
    use crate::infrastructure::simulated::SimulatedMedia;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::ControlPanel;

    type Controller = HalfLoopController<SimulatedMedia, ControlPanel>;

    /// Ten second clip, midpoint at 5 s, already initialized.
    fn ready_controller() -> Controller {
        let mut controller = HalfLoopController::new(
            SimulatedMedia::new(10.0),
            ControlPanel::default(),
            HalfLoopSettings::default(),
        );
        controller.initialize();
        controller.media_mut().clear_requests();
        controller
    }

    /// Delivers queued media events to the controller.
    fn pump(controller: &mut Controller) {
        for event in controller.media_mut().drain_events() {
            controller.handle_event(event);
        }
    }

    #[test]
    fn initialize_sets_forward_at_start_with_initial_controls() {
        let controller = ready_controller();

        assert_eq!(controller.direction(), Direction::Forward);
        assert_abs_diff_eq!(controller.resume_at(), 0.0);
        assert_abs_diff_eq!(controller.midpoint(), 5.0);
        assert!(controller.is_ready());

        let panel = controller.surface();
        assert!(!panel.is_visible(Indicator::PauseIcon));
        assert!(panel.is_visible(Indicator::PlayIcon));
        assert!(!panel.is_enabled(Control::RewindButton));
        assert!(panel.is_enabled(Control::ForwardButton));
    }

    #[test]
    fn commands_before_readiness_are_no_ops() {
        let mut controller = HalfLoopController::new(
            SimulatedMedia::loading(10.0, 3),
            ControlPanel::default(),
            HalfLoopSettings::default(),
        );
        controller.initialize();
        controller.media_mut().clear_requests();

        assert_eq!(controller.toggle_play(), Err(PlaybackError::MediaNotReady));
        assert_eq!(controller.step_backward(), Err(PlaybackError::MediaNotReady));
        assert_eq!(controller.step_forward(), Err(PlaybackError::MediaNotReady));

        assert_abs_diff_eq!(controller.midpoint(), 0.0);
        assert_eq!(controller.direction(), Direction::Forward);
        assert_eq!(controller.media().requests().play_requests, 0);
        assert!(controller.media().requests().seeks.is_empty());
    }

    #[test]
    fn command_after_media_becomes_ready_enters_ready_state() {
        let mut controller = HalfLoopController::new(
            SimulatedMedia::loading(10.0, 1),
            ControlPanel::default(),
            HalfLoopSettings::default(),
        );
        controller.initialize();
        assert!(!controller.is_ready());

        controller.media_mut().advance(0.0);

        assert!(controller.toggle_play().is_ok());
        assert!(controller.is_ready());
        assert_abs_diff_eq!(controller.midpoint(), 5.0);
    }

    #[test]
    fn toggle_play_requests_play_then_pause() {
        let mut controller = ready_controller();

        controller.toggle_play().expect("ready");
        assert_eq!(controller.media().requests().play_requests, 1);
        // Not optimistic: no confirmation yet
        assert!(!controller.is_playing());

        pump(&mut controller);
        assert!(controller.is_playing());
        assert!(controller.surface().is_visible(Indicator::PauseIcon));
        assert!(!controller.surface().is_visible(Indicator::PlayIcon));

        controller.toggle_play().expect("ready");
        assert_eq!(controller.media().requests().pause_requests, 1);
        pump(&mut controller);
        assert!(!controller.is_playing());
        assert!(controller.surface().is_visible(Indicator::PlayIcon));
    }

    #[test]
    fn toggle_play_forward_disables_forward_button() {
        let mut controller = ready_controller();

        controller.toggle_play().expect("ready");

        assert!(!controller.surface().is_enabled(Control::ForwardButton));
        assert!(controller.surface().is_enabled(Control::RewindButton));
    }

    #[test]
    fn toggle_play_backward_disables_rewind_button() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);
        controller.step_backward().expect("ready");
        pump(&mut controller);
        controller.toggle_play().expect("ready");
        pump(&mut controller);
        assert!(!controller.is_playing());

        controller.toggle_play().expect("ready");

        assert_eq!(controller.direction(), Direction::Backward);
        assert!(controller.surface().is_enabled(Control::ForwardButton));
        assert!(!controller.surface().is_enabled(Control::RewindButton));
        assert_eq!(controller.media().requests().play_requests, 2);
    }

    #[test]
    fn toggle_play_resumes_from_current_position() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(2.5);

        controller.toggle_play().expect("ready");

        assert_abs_diff_eq!(controller.resume_at(), 2.5);
        assert!(controller.media().requests().seeks.is_empty());
    }

    #[test]
    fn step_backward_from_forward_mirrors_position() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);

        let outcome = controller.step_backward().expect("ready");

        assert!(outcome.is_flip());
        assert_abs_diff_eq!(controller.resume_at(), 7.0);
        assert_eq!(controller.direction(), Direction::Backward);
        assert_eq!(controller.media().requests().seeks, vec![7.0]);
        assert_eq!(controller.media().requests().play_requests, 1);
        assert!(!controller.surface().is_enabled(Control::RewindButton));
        assert!(controller.surface().is_enabled(Control::ForwardButton));
    }

    #[test]
    fn step_backward_again_continues_from_current_position() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);
        controller.step_backward().expect("ready");
        controller.media_mut().place_playhead(8.0);

        let outcome = controller.step_backward().expect("ready");

        assert!(!outcome.is_flip());
        assert_abs_diff_eq!(controller.resume_at(), 8.0);
        assert_eq!(controller.direction(), Direction::Backward);
        assert_eq!(controller.media().requests().play_requests, 2);
    }

    #[test]
    fn step_forward_from_backward_mirrors_back() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);
        controller.step_backward().expect("ready");
        controller.media_mut().place_playhead(8.5);

        controller.step_forward().expect("ready");

        assert_eq!(controller.direction(), Direction::Forward);
        assert_abs_diff_eq!(controller.resume_at(), 1.5);
        assert!(!controller.surface().is_enabled(Control::ForwardButton));
        assert!(controller.surface().is_enabled(Control::RewindButton));
    }

    #[test]
    fn consecutive_step_forward_never_mirrors() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(1.0);

        let first = controller.step_forward().expect("ready");
        controller.media_mut().place_playhead(1.75);
        let second = controller.step_forward().expect("ready");

        assert!(!first.is_flip());
        assert!(!second.is_flip());
        assert_abs_diff_eq!(controller.resume_at(), 1.75);
        assert_eq!(controller.direction(), Direction::Forward);
    }

    #[test]
    fn time_update_past_midpoint_clamps_and_pauses() {
        let mut controller = ready_controller();
        controller.toggle_play().expect("ready");
        pump(&mut controller);
        controller.media_mut().clear_requests();
        controller.media_mut().place_playhead(5.2);

        assert!(controller.on_time_update());

        assert_abs_diff_eq!(controller.media().current_time(), 5.0);
        assert_eq!(controller.media().requests().seeks, vec![5.0]);
        assert_eq!(controller.media().requests().pause_requests, 1);
        assert!(!controller.surface().is_enabled(Control::ForwardButton));

        pump(&mut controller);
        assert!(!controller.is_playing());
    }

    #[test]
    fn time_update_at_midpoint_does_not_clamp() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(5.0);

        assert!(!controller.on_time_update());
        assert_eq!(controller.media().requests().pause_requests, 0);
    }

    #[test]
    fn backward_playback_is_not_clamped() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);
        controller.step_backward().expect("ready");
        controller.media_mut().clear_requests();
        controller.media_mut().place_playhead(9.5);

        assert!(!controller.on_time_update());
        assert_eq!(controller.media().requests().pause_requests, 0);
    }

    #[test]
    fn custom_boundary_clamps_before_midpoint() {
        let settings = HalfLoopSettings {
            forward_boundary: AxisRatio::new(0.4),
            ..HalfLoopSettings::default()
        };
        let mut controller =
            HalfLoopController::new(SimulatedMedia::new(10.0), ControlPanel::default(), settings);
        controller.initialize();
        controller.media_mut().place_playhead(4.1);

        assert!(controller.on_time_update());
        assert_abs_diff_eq!(controller.media().current_time(), 4.0);
        // Mirror axis is unaffected by the boundary
        assert_abs_diff_eq!(controller.midpoint(), 5.0);
    }

    #[test]
    fn ended_resets_direction_and_reloads() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);
        controller.step_backward().expect("ready");

        controller.on_ended();

        assert_eq!(controller.direction(), Direction::Forward);
        assert_abs_diff_eq!(controller.resume_at(), 0.0);
        assert!(!controller.is_playing());
        assert_eq!(controller.media().requests().loads, 1);
        assert!(controller.surface().is_enabled(Control::ForwardButton));
        assert!(!controller.surface().is_enabled(Control::RewindButton));
        // Geometry survives the reload
        assert!(controller.is_ready());
    }

    #[test]
    fn ended_without_reload_keeps_source() {
        let settings = HalfLoopSettings {
            reload_on_ended: false,
            ..HalfLoopSettings::default()
        };
        let mut controller =
            HalfLoopController::new(SimulatedMedia::new(10.0), ControlPanel::default(), settings);
        controller.initialize();

        controller.on_ended();

        assert_eq!(controller.media().requests().loads, 0);
    }

    #[test]
    fn ended_without_reload_rewinds_to_forward_start() {
        let settings = HalfLoopSettings {
            reload_on_ended: false,
            ..HalfLoopSettings::default()
        };
        let mut controller =
            HalfLoopController::new(SimulatedMedia::new(10.0), ControlPanel::default(), settings);
        controller.initialize();
        controller.media_mut().place_playhead(3.0);
        controller.step_backward().expect("ready");
        pump(&mut controller);

        // Backward half plays through to the end of the clip
        for _ in 0..12 {
            controller.media_mut().advance(0.25);
            pump(&mut controller);
        }

        assert_eq!(controller.direction(), Direction::Forward);
        assert_abs_diff_eq!(controller.media().current_time(), 0.0);

        let outcome = controller.step_backward().expect("ready");

        // 0 s forward mirrors to the end of the backward half
        assert!(outcome.is_flip());
        assert_abs_diff_eq!(outcome.resume_at(), 10.0);
        assert_eq!(controller.direction(), Direction::Backward);
        assert!(controller.media().current_time() >= controller.midpoint());
    }

    #[test]
    fn waiting_shows_loading_except_when_parked_at_boundary() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(2.0);
        controller.on_waiting();
        assert!(controller.surface().is_visible(Indicator::Loading));

        controller.on_playing();
        assert!(!controller.surface().is_visible(Indicator::Loading));

        controller.media_mut().place_playhead(5.0);
        controller.on_waiting();
        assert!(!controller.surface().is_visible(Indicator::Loading));
    }

    #[test]
    fn rejected_play_is_reported_once_and_changes_nothing() {
        let mut collector = DiagnosticsCollector::default();
        let mut controller = HalfLoopController::new(
            SimulatedMedia::new(10.0).with_autoplay_blocked(true),
            ControlPanel::default(),
            HalfLoopSettings::default(),
        )
        .with_diagnostics(collector.handle());
        controller.initialize();
        let before = controller.state().clone();

        controller.toggle_play().expect("ready");
        pump(&mut controller);
        collector.process_pending();

        assert!(!controller.is_playing());
        assert!(controller.surface().is_visible(Indicator::PlayIcon));
        assert!(!controller.surface().is_visible(Indicator::PauseIcon));
        assert_eq!(collector.error_count(), 1);
        assert_eq!(controller.media().requests().play_requests, 1);
        assert_eq!(controller.state().direction, before.direction);
        assert_eq!(controller.state().is_playing, before.is_playing);
    }

    #[test]
    fn diagnostics_record_actions_and_flips() {
        let mut collector = DiagnosticsCollector::default();
        let mut controller = HalfLoopController::new(
            SimulatedMedia::new(10.0),
            ControlPanel::default(),
            HalfLoopSettings::default(),
        )
        .with_diagnostics(collector.handle());
        controller.initialize();
        controller.media_mut().place_playhead(3.0);

        controller.step_backward().expect("ready");
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.iter().any(|k| matches!(
            k,
            DiagnosticEventKind::StateChange {
                state: PlaybackStateEvent::MediaReady { .. }
            }
        )));
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::StepBackward,
            details: None,
        }));
        assert!(kinds.iter().any(|k| matches!(
            k,
            DiagnosticEventKind::StateChange {
                state: PlaybackStateEvent::DirectionFlipped { .. }
            }
        )));
    }

    #[test]
    fn readiness_threshold_is_configurable() {
        let settings = HalfLoopSettings {
            ready_threshold: ReadyState::HaveEnoughData,
            ..HalfLoopSettings::default()
        };
        let mut media = SimulatedMedia::new(10.0);
        media.set_ready_state(ReadyState::HaveCurrentData);
        let mut controller = HalfLoopController::new(media, ControlPanel::default(), settings);
        controller.initialize();

        assert!(!controller.is_ready());

        controller
            .media_mut()
            .set_ready_state(ReadyState::HaveEnoughData);
        controller.handle_event(MediaEvent::LoadedMetadata);
        assert!(controller.is_ready());
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut controller = ready_controller();
        controller.media_mut().place_playhead(3.0);

        controller
            .dispatch(TransportCommand::StepBackward)
            .expect("ready");
        assert_eq!(controller.direction(), Direction::Backward);

        controller
            .dispatch(TransportCommand::StepForward)
            .expect("ready");
        assert_eq!(controller.direction(), Direction::Forward);
    }
}
