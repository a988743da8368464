use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "lavanderos", about = "Panel de gerencia de Lavandería Lavanderos")]
pub struct CommandLine {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive panel.
    Shell {
        /// Answer yes to every confirmation.
        #[clap(long, action)]
        yes: bool,
        /// Pre-filled login user.
        #[clap(long)]
        username: Option<String>,
        #[clap(long)]
        asset_dir: Option<PathBuf>,
    },
    /// Runs shell commands from a file, stopping at the first failure.
    Run {
        file: PathBuf,
        #[clap(long, action)]
        yes: bool,
        #[clap(long)]
        asset_dir: Option<PathBuf>,
    },
    /// Prints the seeded records as JSON.
    Dump {
        #[clap(long, action)]
        pretty: bool,
    },
}
