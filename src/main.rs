// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use halfloop::app::{self, Flags};
use halfloop::config::{self, DEFAULT_CLIP_DURATION_SECS};
use halfloop::error::{Error, Result};

const HELP: &str = "\
halfloop - mirrored half-loop kiosk transport

USAGE:
  halfloop [OPTIONS]

OPTIONS:
  --duration SECS     Length of the simulated clip [default: 10]
  --tick-ms MS        Media clock tick interval
  --config PATH       Settings file to load instead of the default
  --block-autoplay    Refuse play requests like a browser without user gesture
  --report PATH       Write a JSON diagnostics report on exit
  --save-config       Write the effective settings to the settings file
  -h, --help          Print this help

KEYS (one per line):
  up, f       step forward
  down, r     step backward
  space, p    play / pause
  play, forward, rewind   click a panel button
  q           quit
";

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        duration_secs: args
            .opt_value_from_str("--duration")?
            .unwrap_or(DEFAULT_CLIP_DURATION_SECS),
        tick_ms: args.opt_value_from_str("--tick-ms")?,
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
        block_autoplay: args.contains("--block-autoplay"),
        report_path: args.opt_value_from_str::<_, PathBuf>("--report")?,
        save_config: args.contains("--save-config"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    if !flags.duration_secs.is_finite() || flags.duration_secs <= 0.0 {
        return Err(Error::Config(format!(
            "clip duration must be a positive number of seconds, got {}",
            flags.duration_secs
        )));
    }

    Ok(Some(flags))
}

fn try_main() -> Result<()> {
    let Some(flags) = parse_flags()? else {
        print!("{HELP}");
        return Ok(());
    };

    let config = match &flags.config_path {
        Some(path) if path.exists() => config::load_from_path(path)?,
        Some(path) => {
            log::info!("No settings at {}, using defaults", path.display());
            config::Config::default()
        }
        None => config::load()?,
    };

    if flags.save_config {
        match &flags.config_path {
            Some(path) => config::save_to_path(&config, path)?,
            None => config::save(&config)?,
        }
        log::info!("Settings saved");
    }

    app::run(&config, &flags)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
