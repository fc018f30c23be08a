//! Input handling for the formnav TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::debug;

use crate::App;

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Drain pending terminal events without blocking.
///
/// Returns `true` once the app has asked to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        if !event::poll(Duration::ZERO)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(app.should_quit())
}

/// Apply a single key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.request_quit();
        }
        return;
    }

    debug!(code = ?key.code, "Key pressed");
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char('n') => app.submit_section(),
        KeyCode::Char('e' | ' ') => app.edit_selected(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        _ => {}
    }
}
