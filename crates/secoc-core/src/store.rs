//! Key file persistence
//!
//! Owns the two fixed paths of the keypad: the authoritative key file
//! (written on install, re-read by the status probe) and the read-only
//! fallback seed file consulted once at startup.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{KeyStoreError, Result};
use crate::key::{is_valid_key, InstalledKey};

/// Authoritative key file on the device.
pub const AUTHORITATIVE_KEY_PATH: &str = "/data/params/d/SecOCKey";

/// Fallback seed file, read once at startup.
pub const FALLBACK_KEY_PATH: &str = "/persist/tsk/key";

/// Persistent storage for the SecOC key.
pub struct KeyStore {
    authoritative: PathBuf,
    fallback: PathBuf,
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new(AUTHORITATIVE_KEY_PATH, FALLBACK_KEY_PATH)
    }
}

impl KeyStore {
    /// Create a store over explicit paths.
    pub fn new(authoritative: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            authoritative: authoritative.into(),
            fallback: fallback.into(),
        }
    }

    /// Path of the authoritative key file.
    pub fn authoritative_path(&self) -> &Path {
        &self.authoritative
    }

    /// Overwrite the authoritative file with `key` (truncate + write).
    ///
    /// The filesystem is expected to already be writable; a read-only mount
    /// surfaces here as `FileOpen`.
    pub fn install(&self, key: &str) -> Result<()> {
        let mut file = fs::File::create(&self.authoritative).map_err(|source| {
            KeyStoreError::FileOpen {
                path: self.authoritative.clone(),
                source,
            }
        })?;

        file.write_all(key.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| KeyStoreError::FileWrite {
                path: self.authoritative.clone(),
                source,
            })?;

        tracing::info!(path = %self.authoritative.display(), "installed key");
        Ok(())
    }

    /// Read and classify the authoritative file. Absent or unreadable maps
    /// to `InstalledKey::None`.
    pub fn installed_key(&self) -> InstalledKey {
        match fs::read(&self.authoritative) {
            Ok(bytes) => InstalledKey::classify(&bytes),
            Err(_) => InstalledKey::None,
        }
    }

    /// Startup prefill: authoritative file first, then the fallback seed.
    ///
    /// Unlike the probe, this loader trims surrounding whitespace and
    /// silently discards anything that is not a full 32-hex match, with no
    /// binary sub-case.
    pub fn initial_key(&self) -> String {
        read_seed_key(&self.authoritative)
            .or_else(|| read_seed_key(&self.fallback))
            .unwrap_or_default()
    }
}

fn read_seed_key(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let key = content.trim();
    if is_valid_key(key) {
        Some(key.to_string())
    } else {
        None
    }
}
