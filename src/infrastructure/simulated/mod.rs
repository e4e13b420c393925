// SPDX-License-Identifier: MPL-2.0
//! Simulated media element implementing the [`MediaSource`] port.
//!
//! [`SimulatedMedia`] behaves like an HTML video element without decoding
//! anything: a clock moves while playing, ready state rises while loading,
//! and events are queued in the order a browser would fire them.
//!
//! # Design Notes
//!
//! - Time only moves through [`SimulatedMedia::advance`], so tests are
//!   deterministic
//! - Every request is recorded in a [`RequestLog`] for assertions
//! - Play requests can be refused, as a browser does under autoplay policy
//!
//! [`MediaSource`]: crate::application::port::MediaSource

use std::collections::VecDeque;

use crate::application::port::{MediaEvent, MediaSource};
use crate::domain::video::ReadyState;

/// Reason reported when autoplay is blocked, worded like the browser's.
const AUTOPLAY_BLOCKED_REASON: &str =
    "NotAllowedError: play() failed because the user didn't interact with the document first";

/// Ticks needed to regain data after `load()`.
const RELOAD_TICKS: u32 = 1;

/// Requests received from the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestLog {
    /// Every `set_current_time` target, after clamping.
    pub seeks: Vec<f64>,
    pub play_requests: usize,
    pub pause_requests: usize,
    pub loads: usize,
}

/// A deterministic stand-in for a video element.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    duration_secs: f64,
    position_secs: f64,
    paused: bool,
    ready_state: ReadyState,
    /// Remaining `advance` calls before data is available.
    ticks_until_ready: u32,
    autoplay_blocked: bool,
    events: VecDeque<MediaEvent>,
    requests: RequestLog,
}

impl SimulatedMedia {
    /// Creates a clip that is fully buffered from the start.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: duration_secs.max(0.0),
            position_secs: 0.0,
            paused: true,
            ready_state: ReadyState::HaveEnoughData,
            ticks_until_ready: 0,
            autoplay_blocked: false,
            events: VecDeque::new(),
            requests: RequestLog::default(),
        }
    }

    /// Creates a clip that knows nothing until `ticks` calls to `advance`.
    #[must_use]
    pub fn loading(duration_secs: f64, ticks: u32) -> Self {
        let mut media = Self::new(duration_secs);
        if ticks > 0 {
            media.ready_state = ReadyState::HaveNothing;
            media.ticks_until_ready = ticks;
        }
        media
    }

    /// Refuses every play request when `blocked`.
    #[must_use]
    pub fn with_autoplay_blocked(mut self, blocked: bool) -> Self {
        self.autoplay_blocked = blocked;
        self
    }

    pub fn set_ready_state(&mut self, ready_state: ReadyState) {
        self.ready_state = ready_state;
    }

    /// Moves the playhead as if playback had carried it there.
    ///
    /// Unlike `set_current_time`, nothing is recorded or queued.
    pub fn place_playhead(&mut self, position_secs: f64) {
        self.position_secs = position_secs.clamp(0.0, self.duration_secs);
    }

    /// Advances the clock by `delta_secs`.
    ///
    /// While loading, each call brings the source one tick closer to ready.
    /// While playing, the playhead moves and `timeupdate` fires; reaching the
    /// end fires `pause` then `ended`.
    pub fn advance(&mut self, delta_secs: f64) {
        if self.ticks_until_ready > 0 {
            self.ticks_until_ready -= 1;
            if self.ticks_until_ready == 0 {
                self.ready_state = ReadyState::HaveEnoughData;
                self.events.push_back(MediaEvent::LoadedMetadata);
            }
            return;
        }

        if self.paused {
            return;
        }

        self.position_secs += delta_secs.max(0.0);
        if self.position_secs >= self.duration_secs {
            self.position_secs = self.duration_secs;
            self.paused = true;
            self.events.push_back(MediaEvent::TimeUpdate);
            self.events.push_back(MediaEvent::Pause);
            self.events.push_back(MediaEvent::Ended);
        } else {
            self.events.push_back(MediaEvent::TimeUpdate);
        }
    }

    /// Signals a buffering stall at the current position.
    pub fn stall(&mut self) {
        self.events.push_back(MediaEvent::Waiting);
    }

    /// Removes and returns the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn requests(&self) -> &RequestLog {
        &self.requests
    }

    pub fn clear_requests(&mut self) {
        self.requests = RequestLog::default();
    }

    fn has_metadata(&self) -> bool {
        self.ready_state >= ReadyState::HaveMetadata
    }
}

impl MediaSource for SimulatedMedia {
    fn duration(&self) -> Option<f64> {
        self.has_metadata().then_some(self.duration_secs)
    }

    fn current_time(&self) -> f64 {
        self.position_secs
    }

    fn set_current_time(&mut self, position_secs: f64) {
        let target = position_secs.clamp(0.0, self.duration_secs);
        self.requests.seeks.push(target);
        self.position_secs = target;
        self.events.push_back(MediaEvent::TimeUpdate);
    }

    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn request_play(&mut self) {
        self.requests.play_requests += 1;

        if self.autoplay_blocked {
            self.events.push_back(MediaEvent::PlayRejected {
                reason: AUTOPLAY_BLOCKED_REASON.to_string(),
            });
            return;
        }

        if self.paused {
            self.paused = false;
            if self.ready_state < ReadyState::HaveFutureData {
                self.events.push_back(MediaEvent::Waiting);
            }
            self.events.push_back(MediaEvent::Playing);
        }
    }

    fn pause(&mut self) {
        self.requests.pause_requests += 1;
        if !self.paused {
            self.paused = true;
            self.events.push_back(MediaEvent::Pause);
        }
    }

    fn load(&mut self) {
        self.requests.loads += 1;
        self.position_secs = 0.0;
        self.paused = true;
        self.ready_state = ReadyState::HaveMetadata;
        self.ticks_until_ready = RELOAD_TICKS;
    }
}
