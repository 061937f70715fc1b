use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::store::MemoryStore;
use crate::model::PortalConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A fresh app on the login screen, backed by an in-memory store.
pub fn login_app() -> App {
    App::new(&PortalConfig::default(), Box::new(MemoryStore::new()))
}

/// An app signed in as troy, on the dashboard.
pub fn dashboard_app() -> App {
    let mut app = login_app();
    app.login.username = "troy".into();
    app.login.password = "20".into();
    let now = Instant::now();
    app.submit_login(now);
    app.tick(now + Duration::from_secs(1));
    app
}

/// An app with the intensive-care subject open.
pub fn subject_app() -> App {
    let mut app = dashboard_app();
    app.open_study_files();
    app.enter_selected();
    app.enter_selected();
    app
}

/// Render the whole screen for `app`.
pub fn render_app(app: &App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _area| {
        super::render(frame, app);
    })
}
