//! Event handling for the dashboard.
//!
//! Key events are polled with a fixed tick and dispatched on the current page.

use super::app::{App, Page};
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Poll timeout elapsed with no input
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    app.clear_status_message();

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Help overlay swallows everything except its own close keys
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?' | 'q')
        ) {
            app.toggle_help();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Char('T') => {
            // Toggle theme (dark -> light -> high-contrast) and save preference
            let theme_name = toggle_theme();
            let prefs = TuiPreferences {
                theme: theme_name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::debug!("Could not save preferences: {}", e);
            }
            app.set_status_message(format!("Theme: {theme_name}"));
            return;
        }
        _ => {}
    }

    match app.page {
        Page::Home => handle_home_key(app, key),
        Page::Calculator => handle_calculator_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char('c')) {
        app.open_calculator();
    }
}

fn handle_calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // First Esc abandons typing, second leaves the page
            if !app.form.cancel_edit() {
                app.go_home();
            }
        }
        KeyCode::Char('h') => app.go_home(),
        KeyCode::Up | KeyCode::Char('k') => {
            let note = app.form.select_prev();
            app.note(note);
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            let note = app.form.select_next();
            app.note(note);
        }
        KeyCode::Left => {
            let note = app.form.decrement();
            app.note(note);
        }
        KeyCode::Right => {
            let note = app.form.increment();
            app.note(note);
        }
        KeyCode::Char('r') => {
            app.form.reset();
            app.result = None;
            app.set_status_message("Form reset");
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.form.push_char(c);
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Enter => app.calculate(),
        _ => {}
    }
}
