//! Development tasks for the module matrix
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Resolve, Scan};

/// Development tasks for the module matrix
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the module matrix", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve synergy boosts for a grid snapshot
    Resolve(Resolve),

    /// Preview a bulk keep/discard or sort over an inventory
    Scan(Scan),

    /// List every recognized perk id
    Catalog(Catalog),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MATRIX_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(),
        Command::Scan(cmd) => cmd.execute(),
        Command::Catalog(cmd) => cmd.execute(),
    }
}
