//! Configuration types.

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
///
/// Every section has a default, so an empty file (or no file at all) yields
/// a working local configuration with no remote sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote sync backend; `None` disables syncing entirely.
    pub sync: Option<SyncConfig>,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Remote sync backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Base URL of the backend that mirrors records.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_sync_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_sync_timeout_secs() -> u64 {
    10
}
