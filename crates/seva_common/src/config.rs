//! Seva configuration.
//!
//! Configuration lives in /etc/seva/config.toml unless `SEVA_CONFIG` points
//! elsewhere. Every key is optional; missing sections take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::error::SevaError;

pub const SYSTEM_CONFIG_DIR: &str = "/etc/seva";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SEVA_CONFIG";

/// Upstream lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupSettings {
    /// Tracking endpoint, queried with `?applicationId=<CODE>`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Consult the demonstration dataset when the live service has no match
    #[serde(default = "default_fallback_samples")]
    pub fallback_samples: bool,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:7870/api/track-application".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_fallback_samples() -> bool {
    true
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            fallback_samples: default_fallback_samples(),
        }
    }
}

impl LookupSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// sevad listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:7870".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SevaConfig {
    #[serde(default)]
    pub lookup: LookupSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

impl SevaConfig {
    /// Load from the configured path, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from a specific file; parse failures are errors.
    pub fn load_from(path: &Path) -> Result<Self, SevaError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, SevaError> {
        toml::from_str(content).map_err(|e| SevaError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, SevaError> {
        toml::to_string_pretty(self).map_err(|e| SevaError::Config(e.to_string()))
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SYSTEM_CONFIG_DIR).join(CONFIG_FILE))
}
