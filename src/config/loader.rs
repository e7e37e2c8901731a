//! Configuration file loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OmnibarError;

use super::types::Config;

/// Default location: `<config_dir>/omnibar/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("omnibar").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist and parse. A missing file at the
/// default location quietly yields the built-in defaults.
pub fn load(explicit_path: Option<&Path>) -> Result<Config, OmnibarError> {
    match explicit_path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, OmnibarError> {
    let raw = fs::read_to_string(path).map_err(|source| OmnibarError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| OmnibarError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
