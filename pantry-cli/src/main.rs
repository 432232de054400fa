//! Pantry — compatibility-mode policy upload CLI.
//!
//! # Usage
//!
//! ```text
//! pantry push <policy_group> [--lock <path>] [--server <url>] [--token <t>] [--dry-run]
//! pantry lint [--lock <path>]
//! ```

mod commands;
mod config;
mod sink;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{lint::LintArgs, push::PushArgs};

#[derive(Parser, Debug)]
#[command(
    name = "pantry",
    version,
    about = "Upload policy locks and their cookbooks to a policy server",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload the lock's cookbooks and publish the compatibility manifest.
    Push(PushArgs),

    /// Parse and validate a policy lock without touching the network.
    Lint(LintArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Push(args) => args.run(),
        Commands::Lint(args) => args.run(),
    }
}
