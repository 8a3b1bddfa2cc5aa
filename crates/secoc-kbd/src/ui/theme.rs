//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Keypad color palette
pub struct Theme {
    // Status colors
    pub success: Color,
    pub danger: Color,

    // UI element colors
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Keypad keys and buttons
    pub key_bg: Color,
    pub key_fg: Color,
    pub button_bg: Color,

    /// Rotating colors for the 4-digit candidate groups
    pub group_colors: [Color; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: Color::Rgb(76, 175, 80), // #4CAF50 - Green
            danger: Color::Rgb(244, 67, 54),  // #F44336 - Red

            border: Color::Rgb(170, 170, 170),         // #AAAAAA
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575

            key_bg: Color::Rgb(68, 68, 68), // #444444
            key_fg: Color::Rgb(250, 250, 250),
            button_bg: Color::Rgb(66, 66, 66), // #424242

            // The original keypad's dark group palette
            group_colors: [
                Color::Rgb(0x6A, 0x0D, 0xAD), // #6A0DAD
                Color::Rgb(0x2F, 0x4F, 0x4F), // #2F4F4F
                Color::Rgb(0x55, 0x6B, 0x2F), // #556B2F
                Color::Rgb(0x8B, 0x00, 0x00), // #8B0000
                Color::Rgb(0x18, 0x74, 0xCD), // #1874CD
                Color::Rgb(0x00, 0x64, 0x00), // #006400
            ],
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get keypad key style
    pub fn key(&self) -> Style {
        Style::default().bg(self.key_bg).fg(self.key_fg)
    }

    /// Get action button style
    pub fn button(&self) -> Style {
        Style::default()
            .bg(self.button_bg)
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the Nth 4-digit group of the candidate key
    pub fn group(&self, index: usize) -> Style {
        Style::default()
            .fg(self.group_colors[index % self.group_colors.len()])
            .add_modifier(Modifier::BOLD)
    }
}
