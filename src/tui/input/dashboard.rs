use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('f') => app.open_study_files(),
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
