use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Screen};
use crate::util::unicode::display_width;

/// Render the top bar: brand and page on the left, user and logout hint on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.panel;
    let width = area.width as usize;

    let page = match app.screen {
        Screen::StudyFiles => "Study files",
        _ => "Dashboard",
    };
    let mut spans = vec![
        Span::styled(
            " دفعتنا",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | {}", page),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ];

    let right = format!(
        "Hello, {}  Ctrl-L log out ",
        app.username().unwrap_or_default()
    );
    let left_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let right_width = display_width(&right);
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(app.theme.text).bg(bg)));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    let paragraph = Paragraph::new(vec![Line::from(spans), separator])
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
