use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::io::config_io;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to the state-dir log file. The TUI owns the terminal, so if the file
/// can't be opened we log nowhere rather than draw over the screen.
pub fn init_tui() {
    let filter = env_filter("info");
    let path = config_io::log_path();

    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        tracing_subscriber::registry().with(filter).init();
        return;
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(filter).init(),
    }
}

/// Log warnings and errors to stderr for one-shot commands.
pub fn init_cli() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(env_filter("warn"))
        .init();
}
