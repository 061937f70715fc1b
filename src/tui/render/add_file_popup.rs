use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{AddField, App};

use super::{centered_rect_fixed, field_lines};

/// Render the add-file popup over the files view
pub fn render_add_file_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.add_form else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;
    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Add a new file",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(field_lines(
        theme,
        "File name",
        &form.name,
        form.focus == AddField::Name,
        false,
        inner_w,
    ));
    lines.extend(field_lines(
        theme,
        "File link",
        &form.url,
        form.focus == AddField::Url,
        false,
        inner_w,
    ));
    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(theme.red).bg(bg),
        )));
    }
    let hint = if app.is_busy() {
        " Adding\u{2026}".to_string()
    } else {
        " Enter add  Esc cancel".to_string()
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(theme.dim).bg(bg),
    )));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
