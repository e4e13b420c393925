// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub use crate::domain::error::PlaybackError;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Playback(PlaybackError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
