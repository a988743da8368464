use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use assets::AssetDir;
use cli::CommandLine;
use config::config;
use shell::{Mode, Shell};
use store::Database;

mod app;
mod assets;
mod cli;
mod config;
mod error;
mod model;
mod panel;
mod session;
mod shell;
mod store;

pub use error::{Error, Result};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CommandLine::parse();
    match args.command {
        cli::Command::Shell { yes, username, asset_dir } => {
            let mut app = new_app(asset_dir);
            if let Some(username) = username {
                app.remember_username(&username);
            }
            info!("{:<12} - interactive panel", "STARTUP");
            println!("{}", app.screen());
            Shell::new(&mut app)
                .prompt(config().PROMPT.clone())
                .assume_yes(yes)
                .start(io::stdin().lock(), &mut io::stdout())?;
        }
        cli::Command::Run { file, yes, asset_dir } => {
            let mut app = new_app(asset_dir);
            info!("{:<12} - running {}", "STARTUP", file.display());
            let input = BufReader::new(File::open(&file)?);
            let result = Shell::new(&mut app)
                .mode(Mode::Batch)
                .assume_yes(yes)
                .start(input, &mut io::stdout());
            if let Err(err) = result {
                eprintln!("{}", err.client_message());
                return Err(err.into());
            }
        }
        cli::Command::Dump { pretty } => {
            let db = Database::seeded();
            let json = if pretty { serde_json::to_string_pretty(&db) } else { serde_json::to_string(&db) }
                .map_err(Error::from)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn new_app(asset_dir: Option<PathBuf>) -> App {
    let root = asset_dir.unwrap_or_else(|| config().ASSET_DIR.clone());
    App::new(Database::seeded(), AssetDir::new(root))
}
