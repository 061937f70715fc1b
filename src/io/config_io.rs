use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::PortalConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
        .join("dufatna")
        .join("config.toml")
}

/// Default store file path, respecting XDG_DATA_HOME
pub fn default_store_path() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
        .join("dufatna")
        .join("storage.json")
}

/// Log file path, respecting XDG_STATE_HOME
pub fn log_path() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", ".local/state")
        .join("dufatna")
        .join("dufatna.log")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs_home().join(home_fallback))
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config at `path`. A missing file yields the defaults.
pub fn read_config_from(path: &Path) -> Result<PortalConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PortalConfig::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config from `--config` if given, otherwise the default location.
pub fn read_config(override_path: Option<&Path>) -> Result<PortalConfig, ConfigError> {
    match override_path {
        Some(path) => read_config_from(path),
        None => read_config_from(&config_path()),
    }
}

/// Where the store lives: `--store`, then `[storage] path`, then the default.
pub fn resolve_store_path(config: &PortalConfig, override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    match &config.storage.path {
        Some(path) => expand_home(path),
        None => default_store_path(),
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs_home().join(rest),
        None => PathBuf::from(path),
    }
}
