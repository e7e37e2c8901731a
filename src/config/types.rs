// Configuration type definitions

use serde::Deserialize;

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

/// Search service connection section
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the suggestion service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout; absent means requests never time out
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}
