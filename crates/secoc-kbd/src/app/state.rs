//! Application state

use ratatui::layout::Rect;
use secoc_core::{InstalledKeyProbe, KeyEntryController, KeyStore};

use super::config::KbdConfig;
use crate::ui::layout::KeypadLayout;
use crate::ui::Theme;

/// A tappable region of the keypad screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    /// One of the sixteen hex digit keys.
    Key(char),

    /// The backspace key.
    Backspace,

    /// The "Install this key" button.
    Install,

    /// The "Hide" button (exits the keypad).
    Hide,
}

/// Application state
pub struct AppState {
    /// Key entry state machine
    pub controller: KeyEntryController,

    /// Installed-key status probe (rate-limits its own reads)
    pub probe: InstalledKeyProbe,

    /// Label for the installed-key line, refreshed from the probe
    pub installed_label: String,

    /// Tap hit areas recorded during the last render, in draw order
    pub hit_areas: Vec<(TapTarget, Rect)>,

    /// Keypad geometry constants
    pub layout: KeypadLayout,

    /// Color palette
    pub theme: Theme,
}

impl AppState {
    /// Create application state from the persisted configuration
    pub fn new(config: &KbdConfig) -> Self {
        let controller = KeyEntryController::new(config.key_store());
        let probe = InstalledKeyProbe::with_interval(config.key_store(), config.probe_interval());

        Self {
            controller,
            probe,
            installed_label: "Installed: None".to_string(),
            hit_areas: Vec::new(),
            layout: KeypadLayout::default(),
            theme: Theme::default(),
        }
    }

    /// Create state over explicit paths (tests)
    pub fn with_store(store: KeyStore, probe_store: KeyStore) -> Self {
        Self {
            controller: KeyEntryController::new(store),
            probe: InstalledKeyProbe::new(probe_store),
            installed_label: "Installed: None".to_string(),
            hit_areas: Vec::new(),
            layout: KeypadLayout::default(),
            theme: Theme::default(),
        }
    }

    /// Refresh the installed-key label. The probe caches between intervals,
    /// so calling this every loop iteration is cheap.
    pub fn refresh_installed_label(&mut self) {
        self.installed_label = self.probe.poll().label();
    }
}
