use std::time::Duration;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::file_store::FileStore;
use crate::io::store::JsonFileStore;
use crate::model::catalogue::{Catalogue, Resolved};
use crate::model::config::PortalConfig;
use crate::model::user::User;
use crate::ops::add_file::validate_new_file;
use crate::ops::check;
use crate::ops::session::SessionGate;

/// Everything a command needs: the catalogue, the store, and who is signed in.
struct Context {
    catalogue: Catalogue,
    files: FileStore<JsonFileStore>,
    json: bool,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    cli: Cli,
    config: &PortalConfig,
    store: JsonFileStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let Some(command) = cli.command else {
        return Err("no command given (try `dufatna --help`)".into());
    };

    let user = sign_in(config, cli.user.as_deref(), cli.password.as_deref())?;
    let mut ctx = Context {
        catalogue: Catalogue::builtin(),
        files: FileStore::new(store),
        json,
    };

    match command {
        Commands::Login => cmd_login(&user, json),
        Commands::Ls(args) => cmd_ls(&ctx, args),
        Commands::Add(args) => cmd_add(&mut ctx, args),
        Commands::Tree => cmd_tree(&ctx),
        Commands::Check => cmd_check(&ctx),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every command goes through the session gate, with the same delay the
/// TUI shows.
fn sign_in(
    config: &PortalConfig,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<User, Box<dyn std::error::Error>> {
    let (Some(username), Some(password)) = (username, password) else {
        return Err("sign in with -u <USER> -p <PASSWORD>".into());
    };
    let mut gate = SessionGate::new(
        config.credentials.clone(),
        Duration::from_millis(config.delays.login_ms),
    );
    std::thread::sleep(gate.login_delay());
    Ok(gate.login(username, password)?)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_login(user: &User, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = UserJson {
            username: user.username.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Signed in as {}", user.username);
    }
    Ok(())
}

fn cmd_ls(ctx: &Context, args: LsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let listing = match ctx.catalogue.resolve(&args.path) {
        Resolved::Folder(children) => ListingJson::Folder {
            path: args.path,
            folders: children.keys().cloned().collect(),
        },
        Resolved::Subject(key) => ListingJson::Subject {
            path: args.path,
            key: key.to_string(),
            files: ctx.files.load(key),
        },
        Resolved::NotFound => ListingJson::NotFound { path: args.path },
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    let lines = match &listing {
        ListingJson::Folder { folders, .. } => format_folders(folders),
        ListingJson::Subject { files, .. } => format_files(files),
        ListingJson::NotFound { .. } => vec!["Nothing here.".to_string()],
    };
    print_lines(&lines);
    Ok(())
}

fn cmd_add(ctx: &mut Context, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let Some(key) = ctx.catalogue.resolve(&args.path).subject_key() else {
        return Err(format!("not a subject: {}", args.path.join(" / ")).into());
    };
    let file = validate_new_file(&args.name, &args.url)?;

    let mut bucket = ctx.files.open(key);
    let record = ctx.files.append(&mut bucket, file);
    if bucket.unsaved {
        return Err(format!("could not save \"{}\" to {}", record.name, key).into());
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Added \"{}\" ({})", record.name, record.id);
    }
    Ok(())
}

fn cmd_tree(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    if ctx.json {
        let tree = tree_to_json(ctx.catalogue.root());
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        let mut lines = Vec::new();
        format_tree(ctx.catalogue.root(), 0, &mut lines);
        print_lines(&lines);
    }
    Ok(())
}

fn cmd_check(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let result = check::check_store(&ctx.catalogue, &ctx.files);

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_lines(&format_check(&result));
    }

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
