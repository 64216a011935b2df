//! Error types for flint-tui.
//!
//! The render core is total; only sink I/O and configuration loading fail.

use thiserror::Error;

/// Errors surfaced by the renderer and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
