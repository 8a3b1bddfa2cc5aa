//! SecOC Core - Key validation, persistence, and entry state machine
//!
//! This crate provides the display-independent logic for the SecOC key
//! keypad: candidate key editing, 32-hex-digit validation, installed-key
//! classification, and persistence to the authoritative key file.

pub mod controller;
pub mod error;
pub mod key;
pub mod probe;
pub mod store;

pub use controller::{EntryPhase, KeyEntryController};
pub use error::{KeyStoreError, Result};
pub use key::{is_valid_key, InstalledKey, KEY_LEN};
pub use probe::InstalledKeyProbe;
pub use store::KeyStore;
