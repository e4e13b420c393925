// SPDX-License-Identifier: MPL-2.0
//! Media source port definition.
//!
//! This module defines the [`MediaSource`] trait, modelled on an HTML video
//! element, and the [`MediaEvent`]s such an element emits.
//!
//! # Lifecycle
//!
//! 1. The source starts at [`ReadyState::HaveNothing`] with no duration
//! 2. Metadata arrives; `duration()` returns `Some`
//! 3. `request_play()` is answered later by `Playing` or `PlayRejected`
//! 4. While playing, `TimeUpdate` fires periodically
//! 5. At the end of the clip `Pause` then `Ended` fire

use crate::domain::video::ReadyState;

/// Events a media source emits back to its controller.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The playhead moved.
    TimeUpdate,
    /// Playback actually started (or resumed after buffering).
    Playing,
    /// Playback paused, by request or at the end of the clip.
    Pause,
    /// The playhead reached the end of the clip.
    Ended,
    /// Playback stalled waiting for data.
    Waiting,
    /// Duration became known (`loadedmetadata` / `canplay`).
    LoadedMetadata,
    /// A play request was refused.
    PlayRejected {
        /// Reason given by the source, for logs.
        reason: String,
    },
}

impl MediaEvent {
    /// Returns the DOM-style event name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::Playing => "playing",
            MediaEvent::Pause => "pause",
            MediaEvent::Ended => "ended",
            MediaEvent::Waiting => "waiting",
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::PlayRejected { .. } => "playrejected",
        }
    }
}

/// Port for the media element the controller plays.
///
/// Implementations queue their own events; the owner of both the source and
/// the controller forwards them to [`HalfLoopController::handle_event`].
///
/// [`HalfLoopController::handle_event`]: crate::video_player::HalfLoopController::handle_event
///
/// # Example
///
/// ```ignore
/// use halfloop::application::port::MediaSource;
///
/// fn rewind(source: &mut impl MediaSource) {
///     source.pause();
///     source.set_current_time(0.0);
/// }
/// ```
pub trait MediaSource {
    /// Clip duration in seconds, once metadata is known.
    fn duration(&self) -> Option<f64>;

    /// Current playhead position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playhead.
    fn set_current_time(&mut self, position_secs: f64);

    /// How much of the resource is available.
    fn ready_state(&self) -> ReadyState;

    /// Asks the source to start playing.
    ///
    /// The outcome is reported asynchronously through [`MediaEvent::Playing`]
    /// or [`MediaEvent::PlayRejected`].
    fn request_play(&mut self);

    /// Pauses playback. Confirmed by [`MediaEvent::Pause`].
    fn pause(&mut self);

    /// Reloads the resource, resetting buffering state and the playhead.
    fn load(&mut self);
}
