use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, LoginField, Screen, SignupField};

use super::{centered_rect_fixed, field_lines};

/// Render the login or signup form, centered
pub fn render_login_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let box_w: u16 = 52;
    let inner_w = box_w.saturating_sub(2) as usize;

    let brand_style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let title_style = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(theme.dim).bg(bg);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" دفعتنا", brand_style)),
        Line::from(Span::styled(
            " Your gateway to a bright academic future.",
            dim_style,
        )),
        Line::from(""),
    ];

    if app.screen == Screen::Signup {
        let form = &app.signup;
        lines.push(Line::from(Span::styled(" Create a new account", title_style)));
        lines.push(Line::from(Span::styled(
            " Join our academic community",
            dim_style,
        )));
        lines.push(Line::from(""));
        lines.extend(field_lines(
            theme,
            "Username",
            &form.username,
            form.focus == SignupField::Username,
            false,
            inner_w,
        ));
        lines.extend(field_lines(
            theme,
            "Email",
            &form.email,
            form.focus == SignupField::Email,
            false,
            inner_w,
        ));
        lines.extend(field_lines(
            theme,
            "Password",
            &form.password,
            form.focus == SignupField::Password,
            true,
            inner_w,
        ));
        lines.push(Line::from(""));
        if let Some(notice) = &form.notice {
            lines.push(Line::from(Span::styled(
                format!(" {}", notice),
                Style::default().fg(theme.red).bg(bg),
            )));
        }
        lines.push(Line::from(Span::styled(
            " Have an account? Ctrl-S to sign in",
            dim_style,
        )));
    } else {
        let form = &app.login;
        lines.push(Line::from(Span::styled(" Welcome back", title_style)));
        lines.push(Line::from(Span::styled(" Sign in to continue", dim_style)));
        lines.push(Line::from(""));
        lines.extend(field_lines(
            theme,
            "Username",
            &form.username,
            form.focus == LoginField::Username,
            false,
            inner_w,
        ));
        lines.extend(field_lines(
            theme,
            "Password",
            &form.password,
            form.focus == LoginField::Password,
            true,
            inner_w,
        ));
        lines.push(Line::from(""));
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(theme.red).bg(bg),
            )));
        }
        let button = if app.is_busy() {
            " Signing in\u{2026}"
        } else {
            " [ Sign in ]"
        };
        lines.push(Line::from(Span::styled(button, brand_style)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " No account? Ctrl-S to sign up",
            dim_style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " All Rights Reserved \u{a9} Ali Maytham",
        dim_style,
    )));

    let box_h = (lines.len() as u16) + 2;
    let box_area = centered_rect_fixed(box_w, box_h, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, box_area);
}
