use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::user::{Credential, default_credentials};

/// Configuration from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub delays: DelayConfig,
    /// Accounts accepted by the login screen
    #[serde(default = "default_credentials")]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            storage: StorageConfig::default(),
            delays: DelayConfig::default(),
            credentials: default_credentials(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file location. Defaults to $XDG_DATA_HOME/dufatna/storage.json
    #[serde(default)]
    pub path: Option<String>,
    /// Refuse writes that would grow the store past this many bytes
    #[serde(default)]
    pub quota_bytes: Option<u64>,
}

/// Simulated latency, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_add_file_ms")]
    pub add_file_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        DelayConfig {
            login_ms: default_login_ms(),
            add_file_ms: default_add_file_ms(),
        }
    }
}

fn default_login_ms() -> u64 {
    700
}

fn default_add_file_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme color overrides, keyed by theme slot (e.g. "highlight" = "#FB4196")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
