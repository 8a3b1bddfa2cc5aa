//! Keypad configuration persistence
//!
//! Lets the keypad run off-device by overriding the key file paths and the
//! probe cadence. The core itself consumes no flags or environment
//! variables; everything arrives through this struct.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use secoc_core::store::{AUTHORITATIVE_KEY_PATH, FALLBACK_KEY_PATH};
use secoc_core::KeyStore;
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "secoc-kbd";

/// Keypad configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbdConfig {
    /// Authoritative key file, overwritten on install
    #[serde(default = "default_authoritative_path")]
    pub authoritative_path: PathBuf,

    /// Fallback seed file, read once at startup
    #[serde(default = "default_fallback_path")]
    pub fallback_path: PathBuf,

    /// Minimum seconds between installed-key re-reads
    #[serde(default = "default_probe_interval_secs")]
    pub probe_interval_secs: u64,
}

fn default_authoritative_path() -> PathBuf {
    PathBuf::from(AUTHORITATIVE_KEY_PATH)
}

fn default_fallback_path() -> PathBuf {
    PathBuf::from(FALLBACK_KEY_PATH)
}

fn default_probe_interval_secs() -> u64 {
    1
}

impl Default for KbdConfig {
    fn default() -> Self {
        Self {
            authoritative_path: default_authoritative_path(),
            fallback_path: default_fallback_path(),
            probe_interval_secs: default_probe_interval_secs(),
        }
    }
}

impl KbdConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(&config_file, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", config_file);
        Ok(())
    }

    /// Build the key store for the configured paths
    pub fn key_store(&self) -> KeyStore {
        KeyStore::new(&self.authoritative_path, &self.fallback_path)
    }

    /// Probe refresh cadence
    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(1))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
