use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for omnibar
///
/// Only startup can fail loudly. Once the UI is up, service failures
/// are absorbed into fallback data and never surface here.
#[derive(Debug, Error)]
pub enum OmnibarError {
    #[error("Could not read config file {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Could not parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Could not build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
