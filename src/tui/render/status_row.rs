use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pending, Screen};

/// Render the status row (bottom of screen): progress, last message, or key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let (text, color) = match (&app.pending, &app.status) {
        (Some(Pending::Login(_)), _) => ("Signing in\u{2026}".to_string(), app.theme.highlight),
        (Some(Pending::AddFile(_)), _) => ("Saving\u{2026}".to_string(), app.theme.highlight),
        (None, Some(status)) => (status.clone(), app.theme.text_bright),
        (None, None) => (key_hints(app).to_string(), app.theme.dim),
    };

    let line = Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(color).bg(bg),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Login => "Tab switch field  Enter sign in  Ctrl-S sign up  Esc quit",
        Screen::Signup => "Tab switch field  Ctrl-S back to sign in",
        Screen::Dashboard => "f study files  Ctrl-L log out  q quit",
        Screen::StudyFiles if app.add_form.is_some() => "Tab switch field  Enter add  Esc cancel",
        Screen::StudyFiles if app.bucket.is_some() => {
            "\u{2191}\u{2193} move  Enter show link  a add file  Esc back  0-9 breadcrumb"
        }
        Screen::StudyFiles => "\u{2191}\u{2193} move  Enter open  Esc back  0-9 breadcrumb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn hints_follow_screen() {
        let app = login_app();
        assert!(row(&app).contains("Ctrl-S sign up"));
        let app = dashboard_app();
        assert!(row(&app).contains("f study files"));
        let app = subject_app();
        assert!(row(&app).contains("a add file"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let mut app = dashboard_app();
        app.status = Some("Added \"x\"".into());
        assert_eq!(row(&app), " Added \"x\"");
    }
}
