use clap::Parser;
use dufatna::cli::commands::Cli;
use dufatna::cli::handlers;
use dufatna::io::config_io;
use dufatna::io::store::JsonFileStore;
use dufatna::{logging, tui};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(cli.config.as_deref())?;
    let store_path = config_io::resolve_store_path(&config, cli.store.as_deref());
    let store = JsonFileStore::new(store_path).with_quota(config.storage.quota_bytes);

    match cli.command {
        None => {
            // No subcommand → launch TUI
            logging::init_tui();
            tui::run(&config, Box::new(store))
        }
        Some(_) => {
            logging::init_cli();
            handlers::dispatch(cli, &config, store)
        }
    }
}
