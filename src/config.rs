//! Configuration
//!
//! TOML configuration for the search service connection, read from
//! `<config_dir>/omnibar/config.toml` or an explicit `--config` path.

mod loader;
mod types;

pub use loader::{default_config_path, load};
pub use types::{Config, ServiceConfig};
