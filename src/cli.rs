//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "omnibar")]
#[command(version, about = "Terminal search box with live suggestions")]
pub struct Cli {
    /// Base URL of the suggestion service (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Path to a config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
