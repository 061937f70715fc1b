pub mod add_file_popup;
pub mod dashboard_view;
pub mod files_view;
pub mod header;
pub mod login_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use super::app::{App, Screen};
use super::theme::Theme;
use crate::util::unicode::{mask, truncate_to_width};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    match app.screen {
        Screen::Login | Screen::Signup => {
            // Layout: form | status row (1 row)
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            login_view::render_login_view(frame, app, chunks[0]);
            status_row::render_status_row(frame, app, chunks[1]);
        }
        Screen::Dashboard | Screen::StudyFiles => {
            // Layout: header (2 rows) | content | status row (1 row)
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);
            header::render_header(frame, app, chunks[0]);
            if app.screen == Screen::Dashboard {
                dashboard_view::render_dashboard_view(frame, app, chunks[1]);
            } else {
                files_view::render_files_view(frame, app, chunks[1]);
            }
            status_row::render_status_row(frame, app, chunks[2]);
        }
    }

    // Add-file popup (rendered on top of everything)
    if app.screen == Screen::StudyFiles && app.add_form.is_some() {
        add_file_popup::render_add_file_popup(frame, app, area);
    }
}

/// A labelled single-line input: label row, then the value row.
pub(super) fn field_lines(
    theme: &Theme,
    label: &str,
    value: &str,
    focused: bool,
    secret: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(theme.background)
    };
    let shown = if secret { mask(value) } else { value.to_string() };
    let mut value_spans = vec![Span::styled(
        format!(" {}", truncate_to_width(&shown, width.saturating_sub(3))),
        Style::default().fg(theme.text_bright).bg(theme.panel),
    )];
    if focused {
        value_spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(theme.panel),
        ));
    }
    vec![
        Line::from(Span::styled(format!(" {}", label), label_style)),
        Line::from(value_spans),
    ]
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
