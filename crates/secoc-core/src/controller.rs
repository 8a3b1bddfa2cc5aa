//! Key entry state machine
//!
//! Pure controller over the candidate key: append, backspace, install.
//! Holds no rendering concerns so the keypad loop can drive it and tests
//! can exercise it without a terminal.

use crate::key::{is_key_char, KEY_LEN};
use crate::store::KeyStore;

/// Derived phase of the entry state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// Candidate shorter than 32 digits, no pending outcome.
    Editing,

    /// Candidate complete, install available.
    ReadyToInstall,

    /// Last install succeeded; cleared by the next edit.
    Installed,

    /// Last install failed; error lines held until the next edit.
    Error,
}

/// Result of the last install attempt, cleared on edit.
enum Outcome {
    Success,
    Failure(Vec<String>),
}

/// Owns the candidate key and its transitions.
pub struct KeyEntryController {
    store: KeyStore,
    candidate: String,
    outcome: Option<Outcome>,
}

impl KeyEntryController {
    /// Create a controller, prefilling the candidate from the store.
    pub fn new(store: KeyStore) -> Self {
        let candidate = store.initial_key();
        if !candidate.is_empty() {
            tracing::debug!("prefilled candidate key from disk");
        }
        Self {
            store,
            candidate,
            outcome: None,
        }
    }

    /// Append a digit. No-op outside the key alphabet or at full length.
    pub fn push(&mut self, c: char) {
        if is_key_char(c) && self.candidate.len() < KEY_LEN {
            self.candidate.push(c);
        }
    }

    /// Remove the last digit and clear any pending success/error.
    /// No-op on an empty candidate.
    pub fn backspace(&mut self) {
        if self.candidate.pop().is_some() {
            self.outcome = None;
        }
    }

    /// Install is permitted only for a complete candidate with no pending
    /// outcome (prevents re-installing an already-succeeded key unedited).
    pub fn can_install(&self) -> bool {
        self.candidate.len() == KEY_LEN && self.outcome.is_none()
    }

    /// Attempt to persist the candidate. Silent no-op unless permitted.
    pub fn install(&mut self) {
        if !self.can_install() {
            return;
        }

        match self.store.install(&self.candidate) {
            Ok(()) => self.outcome = Some(Outcome::Success),
            Err(err) => {
                tracing::warn!("install failed: {}", err);
                self.outcome = Some(Outcome::Failure(err.display_lines()));
            }
        }
    }

    pub fn phase(&self) -> EntryPhase {
        match &self.outcome {
            Some(Outcome::Success) => EntryPhase::Installed,
            Some(Outcome::Failure(_)) => EntryPhase::Error,
            None if self.candidate.len() == KEY_LEN => EntryPhase::ReadyToInstall,
            None => EntryPhase::Editing,
        }
    }

    /// Current candidate key text.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Digits still missing from a complete key.
    pub fn chars_left(&self) -> usize {
        KEY_LEN - self.candidate.len()
    }

    /// Whether the install button should be offered.
    pub fn show_install(&self) -> bool {
        self.can_install()
    }

    /// Whether the "characters left" hint applies.
    pub fn show_chars_left(&self) -> bool {
        self.candidate.len() < KEY_LEN
    }

    /// Whether the success label should be shown.
    pub fn show_success(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Success))
    }

    /// Error lines from the last failed install, if any.
    pub fn error_lines(&self) -> &[String] {
        match &self.outcome {
            Some(Outcome::Failure(lines)) => lines,
            _ => &[],
        }
    }

    /// The underlying store (for the probe sharing paths with the entry UI).
    pub fn store(&self) -> &KeyStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const KEY: &str = "deadbeefdeadbeefdeadbeefdeadbeef";

    fn empty_controller() -> (tempfile::TempDir, KeyEntryController) {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path().join("SecOCKey"), dir.path().join("seed"));
        let controller = KeyEntryController::new(store);
        (dir, controller)
    }

    fn fill(controller: &mut KeyEntryController, key: &str) {
        for c in key.chars() {
            controller.push(c);
        }
    }

    #[test]
    fn test_push_rejects_non_alphabet() {
        let (_dir, mut controller) = empty_controller();
        controller.push('g');
        controller.push('A');
        controller.push(' ');
        assert_eq!(controller.candidate(), "");
        controller.push('a');
        assert_eq!(controller.candidate(), "a");
    }

    #[test]
    fn test_push_is_noop_at_full_length() {
        let (_dir, mut controller) = empty_controller();
        fill(&mut controller, KEY);
        assert_eq!(controller.phase(), EntryPhase::ReadyToInstall);

        controller.push('0');
        assert_eq!(controller.candidate().len(), KEY_LEN);
        assert_eq!(controller.phase(), EntryPhase::ReadyToInstall);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let (_dir, mut controller) = empty_controller();
        controller.backspace();
        assert_eq!(controller.candidate(), "");
        assert_eq!(controller.phase(), EntryPhase::Editing);
    }

    #[test]
    fn test_install_noop_below_full_length() {
        let (dir, mut controller) = empty_controller();
        fill(&mut controller, &KEY[..31]);
        assert!(!controller.can_install());

        controller.install();
        assert_eq!(controller.phase(), EntryPhase::Editing);
        assert!(!dir.path().join("SecOCKey").exists());
    }

    #[test]
    fn test_install_success_then_locked_until_edit() {
        let (dir, mut controller) = empty_controller();
        fill(&mut controller, KEY);
        controller.install();

        assert_eq!(controller.phase(), EntryPhase::Installed);
        assert!(controller.show_success());
        assert!(!controller.can_install());
        assert_eq!(fs::read_to_string(dir.path().join("SecOCKey")).unwrap(), KEY);

        // Re-install of the unedited key stays unavailable
        controller.install();
        assert_eq!(controller.phase(), EntryPhase::Installed);

        // One edit clears the outcome and reopens editing
        controller.backspace();
        assert_eq!(controller.phase(), EntryPhase::Editing);
        assert!(!controller.show_success());
        assert_eq!(controller.chars_left(), 1);
    }

    #[test]
    fn test_install_failure_keeps_candidate_and_stores_lines() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path().join("nope/SecOCKey"), dir.path().join("seed"));
        let mut controller = KeyEntryController::new(store);
        fill(&mut controller, KEY);

        controller.install();
        assert_eq!(controller.phase(), EntryPhase::Error);
        assert_eq!(controller.error_lines().len(), 2);
        assert!(controller.error_lines().iter().all(|l| !l.is_empty()));
        assert_eq!(controller.candidate(), KEY);
        assert!(!controller.can_install());

        // Backspace recovers
        controller.backspace();
        assert!(controller.error_lines().is_empty());
        assert_eq!(controller.phase(), EntryPhase::Editing);
    }

    #[test]
    fn test_prefill_from_seed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("seed"), KEY).unwrap();
        let store = KeyStore::new(dir.path().join("SecOCKey"), dir.path().join("seed"));

        let controller = KeyEntryController::new(store);
        assert_eq!(controller.candidate(), KEY);
        assert_eq!(controller.phase(), EntryPhase::ReadyToInstall);
    }
}
