//! The keypad screen
//!
//! Single-screen layout mirroring the device keyboard: installed-key line,
//! grouped candidate display, install/success/error feedback, and the
//! two-row hex keyboard. Every tappable element registers its hit area in
//! the app state for the mouse handler.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use secoc_core::KEY_LEN;

use crate::app::{AppState, TapTarget};
use crate::ui::layout::centered_rect_fixed;

const TITLE: &str = "SECOC KEYPAD";
const HIDE_LABEL: &str = " Hide ";
const INSTALL_LABEL: &str = " Install this key ";
const SUCCESS_LABEL: &str = "Success!";

/// Render the keypad screen
pub fn render(frame: &mut Frame, state: &mut AppState) {
    state.hit_areas.clear();

    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                            // Header
            Constraint::Length(2),                            // Installed key label
            Constraint::Length(3),                            // Input box
            Constraint::Length(1),                            // Chars-left hint
            Constraint::Length(3),                            // Install button / success
            Constraint::Length(2),                            // Error lines
            Constraint::Min(0),                               // Spacer
            Constraint::Length(state.layout.keyboard_height()), // Keyboard
            Constraint::Length(1),                            // Footer hints
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_installed_label(frame, chunks[1], state);
    render_input_box(frame, chunks[2], state);
    render_chars_left(frame, chunks[3], state);
    render_action(frame, chunks[4], state);
    render_errors(frame, chunks[5], state);
    render_keyboard(frame, chunks[7], state);
    render_footer(frame, chunks[8], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(HIDE_LABEL.len() as u16),
        ])
        .split(inner);

    let title = Paragraph::new(format!(" {}", TITLE)).style(theme.title());
    frame.render_widget(title, chunks[0]);

    let time = chrono::Local::now().format("%H:%M").to_string();
    let clock = Paragraph::new(time).style(theme.text_muted());
    frame.render_widget(clock, chunks[1]);

    let hide = Paragraph::new(HIDE_LABEL).style(theme.button());
    frame.render_widget(hide, chunks[2]);
    state.hit_areas.push((TapTarget::Hide, chunks[2]));
}

fn render_installed_label(frame: &mut Frame, area: Rect, state: &AppState) {
    let label = Paragraph::new(state.installed_label.as_str())
        .style(state.theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(label, area);
}

fn render_input_box(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let layout = &state.layout;

    // 32 digits, a space between groups, plus borders and one cell of padding
    let group_count = KEY_LEN / layout.group_size;
    let box_width = (KEY_LEN + group_count - 1) as u16 + 4;
    let box_area = centered_rect_fixed(box_width, 3, area);

    let block = Block::default().borders(Borders::ALL).border_style(theme.border());
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    // Candidate in 4-digit groups with rotating colors
    let candidate = state.controller.candidate();
    let mut spans = Vec::new();
    for (i, group) in candidate.as_bytes().chunks(layout.group_size).enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            String::from_utf8_lossy(group).into_owned(),
            theme.group(i),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(input, inner);
}

fn render_chars_left(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.controller.show_chars_left() {
        return;
    }

    let hint = format!("{} characters left", state.controller.chars_left());
    let label = Paragraph::new(hint)
        .style(state.theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(label, area);
}

fn render_action(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;

    if state.controller.show_install() {
        let button_area = centered_rect_fixed(INSTALL_LABEL.len() as u16 + 2, 3, area);
        let block = Block::default().borders(Borders::ALL).border_style(theme.border());
        let inner = block.inner(button_area);
        frame.render_widget(block, button_area);

        let button = Paragraph::new(INSTALL_LABEL)
            .style(theme.button())
            .alignment(Alignment::Center);
        frame.render_widget(button, inner);
        state.hit_areas.push((TapTarget::Install, button_area));
    } else if state.controller.show_success() {
        let label = Paragraph::new(SUCCESS_LABEL)
            .style(theme.success())
            .alignment(Alignment::Center);
        frame.render_widget(label, area);
    }
}

fn render_errors(frame: &mut Frame, area: Rect, state: &AppState) {
    for (i, line) in state.controller.error_lines().iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let widget = Paragraph::new(line.as_str())
            .style(state.theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(widget, Rect::new(area.x, y, area.width, 1));
    }
}

fn render_keyboard(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let rects = state.layout.key_rects(area);

    for &(target, rect) in &rects {
        let label = match target {
            TapTarget::Key(c) => c.to_string(),
            _ => "<".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(state.theme.border())
            .style(state.theme.key());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let key = Paragraph::new(label)
            .style(state.theme.key())
            .alignment(Alignment::Center);
        frame.render_widget(key, inner);
    }

    state.hit_areas.extend(rects);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "[0-9 a-f] Digit  [Backspace] Delete  [Enter] Install  [Esc] Hide";
    let footer = Paragraph::new(hints)
        .style(state.theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
