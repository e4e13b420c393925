// SPDX-License-Identifier: MPL-2.0
//! `halfloop` drives the mirrored half-loop transport of a 360° video kiosk.
//!
//! A single clip is authored so its second half is the first half reversed.
//! Seeking to the mirrored position (`2 * midpoint - position`) gives the
//! illusion of playing backward, so the kiosk can step forward and backward
//! through the scene without a real reverse decoder.
//!
//! The controller talks to the outside world through two ports, a media
//! source and a UI surface, and ships with a simulated media element and a
//! terminal control panel.

#![doc(html_root_url = "https://docs.rs/halfloop/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
