//! Development tasks for the pet game
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Act, Clean, ReadSave, ShowConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Development tasks for the pet game
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the pet game", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Read and inspect a save slot or save file
    ReadSave(ReadSave),

    /// Show the settings read from the game configuration file
    ShowConfig(ShowConfig),

    /// Apply an action to a saved pet and save the result
    Act(Act),

    /// Delete save slots
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::ReadSave(cmd) => cmd.execute(),
        Command::ShowConfig(cmd) => cmd.execute(),
        Command::Act(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
