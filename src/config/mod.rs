// SPDX-License-Identifier: MPL-2.0
//! This module handles the kiosk configuration, loading and saving it to a
//! `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use halfloop::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Clip authored with the seam at 40% of its length
//! config.mirror_axis = Some(0.4);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{AxisRatio, ReadyState};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HalfLoop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fraction of the clip the mirror formula reflects across.
    #[serde(default)]
    pub mirror_axis: Option<f64>,
    /// Fraction of the clip forward playback is clamped to. Defaults to the
    /// mirror axis.
    #[serde(default)]
    pub forward_boundary: Option<f64>,
    #[serde(default)]
    pub reload_on_ended: Option<bool>,
    /// Ready state ordinal (0–4) required before commands act.
    #[serde(default)]
    pub ready_threshold: Option<u8>,
    #[serde(default)]
    pub tick_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mirror_axis: Some(DEFAULT_MIRROR_AXIS),
            forward_boundary: None,
            reload_on_ended: Some(DEFAULT_RELOAD_ON_ENDED),
            ready_threshold: Some(DEFAULT_READY_THRESHOLD),
            tick_ms: Some(DEFAULT_TICK_MS),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_CAPACITY),
        }
    }
}

impl Config {
    /// Resolves the controller parameters, filling gaps with defaults.
    #[must_use]
    pub fn half_loop_settings(&self) -> HalfLoopSettings {
        let mirror_axis = AxisRatio::new(self.mirror_axis.unwrap_or(DEFAULT_MIRROR_AXIS));
        let forward_boundary = self
            .forward_boundary
            .map_or(mirror_axis, AxisRatio::new);

        HalfLoopSettings {
            mirror_axis,
            forward_boundary,
            reload_on_ended: self.reload_on_ended.unwrap_or(DEFAULT_RELOAD_ON_ENDED),
            ready_threshold: ReadyState::from_ordinal(
                self.ready_threshold.unwrap_or(DEFAULT_READY_THRESHOLD),
            ),
        }
    }

    /// Interval between media clock ticks, clamped to a sane range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_ms
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(MIN_TICK_MS, MAX_TICK_MS);
        Duration::from_millis(ms)
    }
}

/// Typed configuration of a half-loop controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfLoopSettings {
    pub mirror_axis: AxisRatio,
    pub forward_boundary: AxisRatio,
    pub reload_on_ended: bool,
    pub ready_threshold: ReadyState,
}

impl Default for HalfLoopSettings {
    fn default() -> Self {
        Config::default().half_loop_settings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
