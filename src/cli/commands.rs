use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dufatna", about = concat!("دفعتنا v", env!("CARGO_PKG_VERSION"), " - your class's study files"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read config from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this store file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Username to sign in with
    #[arg(short = 'u', long = "user", global = true)]
    pub user: Option<String>,

    /// Password to sign in with
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a username and password
    Login,
    /// List a folder's children or a subject's files
    Ls(LsArgs),
    /// Add a file link to a subject
    Add(AddArgs),
    /// Print the catalogue with bucket keys
    Tree,
    /// Report whether every subject's stored files can be read
    Check,
}

#[derive(Args)]
pub struct LsArgs {
    /// Folder labels from the root (default: the root)
    pub path: Vec<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Folder labels leading to the subject
    #[arg(required = true)]
    pub path: Vec<String>,
    /// Display name of the file
    #[arg(long)]
    pub name: String,
    /// Link to the file (absolute URL)
    #[arg(long)]
    pub url: String,
}
