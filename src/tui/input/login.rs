use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, LoginField, Screen, SignupField};

use super::text::edit_field;

pub(super) fn handle_login(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        app.screen = Screen::Signup;
        return;
    }

    let form = &mut app.login;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.focus = match form.focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
        }
        KeyCode::Enter => match form.focus {
            LoginField::Username => form.focus = LoginField::Password,
            LoginField::Password => app.submit_login(now),
        },
        KeyCode::Esc => app.should_quit = true,
        _ => {
            let field = match form.focus {
                LoginField::Username => &mut form.username,
                LoginField::Password => &mut form.password,
            };
            edit_field(field, key);
        }
    }
}

pub(super) fn handle_signup(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s'))
    {
        app.signup.notice = None;
        app.screen = Screen::Login;
        return;
    }

    let form = &mut app.signup;
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = match form.focus {
                SignupField::Username => SignupField::Email,
                SignupField::Email => SignupField::Password,
                SignupField::Password => SignupField::Username,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = match form.focus {
                SignupField::Username => SignupField::Password,
                SignupField::Email => SignupField::Username,
                SignupField::Password => SignupField::Email,
            };
        }
        KeyCode::Enter => match form.focus {
            SignupField::Username => form.focus = SignupField::Email,
            SignupField::Email => form.focus = SignupField::Password,
            SignupField::Password => app.submit_signup(),
        },
        _ => {
            let field = match form.focus {
                SignupField::Username => &mut form.username,
                SignupField::Email => &mut form.email,
                SignupField::Password => &mut form.password,
            };
            edit_field(field, key);
        }
    }
}
