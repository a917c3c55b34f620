use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use soundrack::api::{CatalogApi, CmdMessage, ConfigAction, MessageLevel};
use soundrack::error::{CatalogError, Result};
use std::fs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CatalogApi,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Play { name, track }) => handle_play(&ctx, &name, track),
        Some(Commands::List { expand }) => handle_list(&ctx, expand),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.root {
        Some(path) => path.clone(),
        None => match std::env::var_os("SOUNDRACK_ROOT") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let proj_dirs = ProjectDirs::from("com", "soundrack", "soundrack").ok_or_else(
                    || CatalogError::Api("Could not determine a data directory".to_string()),
                )?;
                proj_dirs.data_dir().join("sounds")
            }
        },
    };

    // The core treats a missing root as unreadable; creating it on first
    // run is this client's job.
    if !root.exists() {
        fs::create_dir_all(&root)?;
    }

    let api = CatalogApi::open(root)?;
    Ok(AppContext { api })
}

fn handle_play(ctx: &AppContext, name: &str, track: usize) -> Result<()> {
    let result = ctx.api.play(name, Some(track))?;
    print_messages(&result.messages);
    if let Some(clip) = &result.clip {
        println!("{}", clip.path.display());
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, expand: bool) -> Result<()> {
    let result = ctx.api.list(expand)?;
    for line in &result.lines {
        println!("{}", line);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("extensions = {}", config.get("extensions").unwrap_or_default());
        println!("sort = {}", config.get("sort").unwrap_or_default());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
