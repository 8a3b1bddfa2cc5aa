//! UI rendering

pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::AppState;

/// Main render function. The keypad is a single screen.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    screens::keypad::render(frame, state);
}
