use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

const STATS: [(&str, &str); 3] = [
    ("Enrolled courses", "6"),
    ("New notifications", "3"),
    ("Upcoming tasks", "2"),
];

const ANNOUNCEMENTS: [(&str, &str); 2] = [
    (
        "Calculus exam postponed",
        "The calculus exam set for next Sunday is postponed until further notice.",
    ),
    (
        "Artificial intelligence workshop",
        "Join a workshop on Tuesday in the main conference hall.",
    ),
];

/// Render the dashboard: greeting, stat cards, study-files entry, announcements
pub fn render_dashboard_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // greeting
            Constraint::Length(4), // cards
            Constraint::Min(1),    // announcements
        ])
        .split(area);

    let greeting = Paragraph::new(Line::from(Span::styled(
        format!(
            " Welcome to your dashboard, {}!",
            app.username().unwrap_or_default()
        ),
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(bg));
    frame.render_widget(greeting, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    for (i, (title, value)) in STATS.iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", title),
                Style::default().fg(theme.dim).bg(bg),
            )),
            Line::from(Span::styled(
                format!(" {}", value),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(card_block.clone());
        frame.render_widget(card, cards[i]);
    }

    let files_card = Paragraph::new(vec![
        Line::from(Span::styled(
            " Study files",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " press f to open",
            Style::default().fg(theme.highlight).bg(bg),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.highlight).bg(bg))
            .style(Style::default().bg(bg)),
    );
    frame.render_widget(files_card, cards[3]);

    let mut lines = vec![
        Line::from(Span::styled(
            " Important announcements",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (title, body) in ANNOUNCEMENTS {
        lines.push(Line::from(Span::styled(
            format!(" {}", title),
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", body),
            Style::default().fg(theme.text).bg(bg),
        )));
        lines.push(Line::from(""));
    }
    let announcements = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(announcements, chunks[2]);
}
