//! Installed-key status probe
//!
//! Re-reads the authoritative key file at most once per interval and caches
//! the classification in between. Purely observational: it feeds a display
//! label and never touches the entry state machine. The read blocks the
//! render loop briefly, which is fine for a file of a few dozen bytes.

use std::time::{Duration, Instant};

use crate::key::InstalledKey;
use crate::store::KeyStore;

/// Default refresh cadence for the installed-key label.
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(1);

/// Rate-limited reader of the installed key.
pub struct InstalledKeyProbe {
    store: KeyStore,
    interval: Duration,
    last_read: Option<Instant>,
    status: InstalledKey,
}

impl InstalledKeyProbe {
    pub fn new(store: KeyStore) -> Self {
        Self::with_interval(store, DEFAULT_PROBE_INTERVAL)
    }

    pub fn with_interval(store: KeyStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            last_read: None,
            status: InstalledKey::None,
        }
    }

    /// Refresh the status if the interval has elapsed, else return the
    /// cached classification. The first call always reads.
    pub fn poll(&mut self) -> &InstalledKey {
        let due = match self.last_read {
            Some(at) => at.elapsed() >= self.interval,
            None => true,
        };
        if due {
            let status = self.store.installed_key();
            if status != self.status {
                tracing::debug!(label = %status.label(), "installed key changed");
                self.status = status;
            }
            self.last_read = Some(Instant::now());
        }
        &self.status
    }

    /// Last classification without touching the disk.
    pub fn status(&self) -> &InstalledKey {
        &self.status
    }
}
