mod dashboard;
mod files;
mod login;
mod text;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Screen};

/// Handle a key event on the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    handle_key_at(app, key, Instant::now());
}

/// Same as `handle_key`, with the clock passed in (used by tests).
pub fn handle_key_at(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('l') if app.session.is_authenticated() => {
                app.logout();
                return;
            }
            _ => {}
        }
    }

    // A login or save in flight takes no other input
    if app.is_busy() {
        return;
    }

    match app.screen {
        Screen::Login => login::handle_login(app, key, now),
        Screen::Signup => login::handle_signup(app, key),
        Screen::Dashboard => dashboard::handle_dashboard(app, key),
        Screen::StudyFiles => {
            if app.add_form.is_some() {
                files::handle_add_form(app, key, now);
            } else {
                files::handle_browse(app, key);
            }
        }
    }
}
