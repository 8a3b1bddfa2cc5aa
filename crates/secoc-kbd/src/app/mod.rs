//! Application state and event handling

pub mod config;
mod state;

pub use state::{AppState, TapTarget};

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;

use crate::ui;
use config::KbdConfig;

/// Application result type
pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Last tick time
    last_tick: Instant,
}

impl App {
    /// Create a new application instance
    pub fn new(config: KbdConfig) -> Self {
        Self {
            state: AppState::new(&config),
            should_quit: false,
            tick: 0,
            last_tick: Instant::now(),
        }
    }

    /// Create an application over explicit state (tests)
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
            tick: 0,
            last_tick: Instant::now(),
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.should_quit {
            // The probe rate-limits its own file reads to its interval
            self.state.refresh_installed_label();

            // Draw UI (also records the tap hit areas)
            terminal.draw(|frame| ui::render(frame, &mut self.state))?;

            // Handle at most one event per iteration
            let timeout = tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            // Update tick
            if self.last_tick.elapsed() >= tick_rate {
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Handle key press events. Physical keys mirror the on-screen keypad.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.tap(TapTarget::Hide),
            KeyCode::Backspace => self.tap(TapTarget::Backspace),
            KeyCode::Enter => self.tap(TapTarget::Install),
            KeyCode::Char(c) => {
                // The controller only accepts the key alphabet; fold case so
                // 'A'..'F' work from a physical keyboard
                self.tap(TapTarget::Key(c.to_ascii_lowercase()));
            }
            _ => {}
        }
    }

    /// Handle a pointer tap. The first hit area containing the point wins;
    /// anything outside the keypad is ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let target = self
            .state
            .hit_areas
            .iter()
            .find(|(_, rect)| crate::ui::layout::point_in_rect(mouse.column, mouse.row, *rect))
            .map(|(target, _)| *target);

        if let Some(target) = target {
            self.tap(target);
        }
    }

    /// Apply a registered tap to the entry state machine
    fn tap(&mut self, target: TapTarget) {
        match target {
            TapTarget::Key(c) => self.state.controller.push(c),
            TapTarget::Backspace => self.state.controller.backspace(),
            TapTarget::Install => self.state.controller.install(),
            TapTarget::Hide => self.should_quit = true,
        }
    }
}
