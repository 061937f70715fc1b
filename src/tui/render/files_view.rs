use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::file_store::Bucket;
use crate::model::Resolved;
use crate::tui::app::App;
use crate::util::unicode::{display_width, pad_to_width, truncate_to_width};

/// Render the study-files browser: breadcrumb, then folders or files
pub fn render_files_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    render_breadcrumb(frame, app, chunks[0]);

    match (&app.bucket, app.current()) {
        (Some(bucket), _) => render_file_list(frame, app, bucket, chunks[1]),
        (None, Resolved::Folder(_)) => render_folders(frame, app, chunks[1]),
        (None, _) => render_message(frame, app, chunks[1], &["Nothing here."]),
    }
}

fn render_breadcrumb(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let num_style = Style::default().fg(app.theme.highlight).bg(bg);
    let text_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![
        Span::styled(" 0", num_style),
        Span::styled(" Dashboard", text_style),
    ];
    for (i, label) in app.nav.breadcrumbs().iter().enumerate() {
        spans.push(Span::styled(" / ", text_style));
        spans.push(Span::styled(format!("{}", i + 1), num_style));
        spans.push(Span::styled(format!(" {}", label), text_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_folders(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.folder_labels();
    if labels.is_empty() {
        render_message(frame, app, area, &["No subfolders here."]);
        return;
    }

    let width = area.width as usize;
    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .skip(scroll_offset(app.cursor, area.height as usize))
        .map(|(i, label)| {
            let selected = i == app.cursor;
            let bg = if selected {
                app.theme.selection_bg
            } else {
                app.theme.background
            };
            let marker = if selected { " \u{25B8} " } else { "   " };
            let text = format!("{}[{}]", marker, truncate_to_width(label, width.saturating_sub(6)));
            let mut style = Style::default().fg(app.theme.text_bright).bg(bg);
            if selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(pad_to_width(&text, width), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn render_file_list(frame: &mut Frame, app: &App, bucket: &Bucket, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut title = vec![Span::styled(
        " Available files",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    if bucket.unsaved {
        title.push(Span::styled(
            "  (not saved)",
            Style::default().fg(app.theme.red).bg(bg),
        ));
    }
    let mut lines = vec![Line::from(title), Line::from("")];

    if bucket.files.is_empty() {
        lines.push(Line::from(Span::styled(
            " No files in this folder yet.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        lines.push(Line::from(Span::styled(
            " You can add the first one now (a).",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        let list_height = (area.height as usize).saturating_sub(2);
        for (i, file) in bucket
            .files
            .iter()
            .enumerate()
            .skip(scroll_offset(app.cursor, list_height))
        {
            let selected = i == app.cursor;
            let row_bg = if selected { app.theme.selection_bg } else { bg };
            let name = truncate_to_width(&file.name, width / 2);
            let prefix = format!(" {} ", if selected { "\u{25B8}" } else { " " });
            let used = display_width(&prefix) + display_width(&name) + 2;
            let url = truncate_to_width(&file.url, width.saturating_sub(used));
            let mut spans = vec![
                Span::styled(prefix, Style::default().fg(app.theme.highlight).bg(row_bg)),
                Span::styled(name, Style::default().fg(app.theme.text_bright).bg(row_bg)),
                Span::styled("  ", Style::default().bg(row_bg)),
                Span::styled(url, Style::default().fg(app.theme.dim).bg(row_bg)),
            ];
            let content: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if selected && content < width {
                spans.push(Span::styled(
                    " ".repeat(width - content),
                    Style::default().bg(row_bg),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect, messages: &[&str]) {
    let lines: Vec<Line> = messages
        .iter()
        .map(|m| {
            Line::from(Span::styled(
                format!(" {}", m),
                Style::default().fg(app.theme.dim).bg(app.theme.background),
            ))
        })
        .collect();
    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// First visible row so the cursor stays on screen
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return cursor;
    }
    cursor.saturating_sub(height - 1)
}
