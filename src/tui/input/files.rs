use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{AddField, App, Screen};

use super::text::edit_field;

/// Keys while browsing folders or a subject's file list
pub(super) fn handle_browse(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor = app.item_count().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.enter_selected(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_back(),
        KeyCode::Char('a') => app.open_add_form(),
        // Breadcrumbs: 0 is the dashboard, n keeps the first n labels
        KeyCode::Char('0') => {
            app.add_form = None;
            app.screen = Screen::Dashboard;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let depth = c as usize - '0' as usize;
            app.jump_to(depth);
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

/// Keys while the add-file popup is open
pub(super) fn handle_add_form(app: &mut App, key: KeyEvent, now: Instant) {
    let Some(form) = app.add_form.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.cancel_add_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.focus = match form.focus {
                AddField::Name => AddField::Url,
                AddField::Url => AddField::Name,
            };
        }
        KeyCode::Enter => match form.focus {
            AddField::Name => form.focus = AddField::Url,
            AddField::Url => app.submit_add_file(now),
        },
        _ => {
            let field = match form.focus {
                AddField::Name => &mut form.name,
                AddField::Url => &mut form.url,
            };
            edit_field(field, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::io::store::MemoryStore;
    use crate::model::PortalConfig;
    use crate::tui::app::{App, Screen};
    use crate::tui::input::handle_key_at;

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key_at(app, KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn app() -> App {
        let mut config = PortalConfig::default();
        config.delays.login_ms = 0;
        config.delays.add_file_ms = 0;
        App::new(&config, Box::new(MemoryStore::new()))
    }

    #[test]
    fn keyboard_login_to_file_add() {
        let now = Instant::now();
        let mut app = app();

        type_text(&mut app, "Troy", now);
        press(&mut app, KeyCode::Tab, now);
        type_text(&mut app, "20", now);
        press(&mut app, KeyCode::Enter, now);
        app.tick(now);
        assert_eq!(app.screen, Screen::Dashboard);

        press(&mut app, KeyCode::Char('f'), now);
        assert_eq!(app.screen, Screen::StudyFiles);
        press(&mut app, KeyCode::Enter, now); // ministerial files
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Enter, now); // anesthesia basics
        assert_eq!(
            app.bucket.as_ref().map(|b| b.key.as_str()),
            Some("ministerial-anesthesia-basics")
        );

        press(&mut app, KeyCode::Char('a'), now);
        type_text(&mut app, "Week 1", now);
        press(&mut app, KeyCode::Enter, now);
        type_text(&mut app, "https://example.com/w1.pdf", now);
        press(&mut app, KeyCode::Enter, now);
        app.tick(now + Duration::from_millis(1));

        assert!(app.add_form.is_none());
        let files = app.files.load("ministerial-anesthesia-basics");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "Week 1");
    }

    #[test]
    fn keys_ignored_while_busy() {
        let now = Instant::now();
        let mut config = PortalConfig::default();
        config.delays.login_ms = 10_000;
        let mut app = App::new(&config, Box::new(MemoryStore::new()));
        type_text(&mut app, "troy", now);
        press(&mut app, KeyCode::Tab, now);
        type_text(&mut app, "20", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.is_busy());

        type_text(&mut app, "xyz", now);
        assert_eq!(app.login.password, "20");
    }

    #[test]
    fn ctrl_l_logs_out() {
        let now = Instant::now();
        let mut app = app();
        app.login.username = "manar".into();
        app.login.password = "28".into();
        app.submit_login(now);
        app.tick(now);
        handle_key_at(
            &mut app,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
            now,
        );
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn breadcrumb_zero_returns_to_dashboard() {
        let now = Instant::now();
        let mut app = app();
        app.login.username = "troy".into();
        app.login.password = "20".into();
        app.submit_login(now);
        app.tick(now);
        app.open_study_files();
        press(&mut app, KeyCode::Enter, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.nav.depth(), 2);
        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.nav.depth(), 1);
        assert!(app.bucket.is_none());
        press(&mut app, KeyCode::Char('0'), now);
        assert_eq!(app.screen, Screen::Dashboard);
    }
}
