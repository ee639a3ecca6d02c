//! Compendium command-line client.
//!
//! Estimates capture chances from the bundled (or configured) content tables.
//!
//! # Examples
//!
//! ```bash
//! compendium catch --species Snorlax --hp 20 --status Sleep --ball "Ultra Ball"
//! compendium compare --catch-rate 45 --level 12 --turns 3
//! ```
mod commands;
mod config;
mod content;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Balls, Catch, Compare, Species, Statuses};
use config::CliConfig;

/// Catch probability calculator for the compendium
#[derive(Parser)]
#[command(name = "compendium")]
#[command(about = "Catch probability calculator and content browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides COMPENDIUM_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Estimate the chance that one throw captures the target
    Catch(Catch),

    /// Rank every ball for the same encounter
    Compare(Compare),

    /// List capture devices
    Balls(Balls),

    /// List status conditions
    Statuses(Statuses),

    /// Browse the species catalog
    Species(Species),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for COMPENDIUM_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CliConfig::from_env().with_data_dir(cli.data_dir);

    let content = content::load(&config)?;

    match cli.command {
        Command::Catch(cmd) => cmd.execute(&content, &config),
        Command::Compare(cmd) => cmd.execute(&content, &config),
        Command::Balls(cmd) => cmd.execute(&content),
        Command::Statuses(cmd) => cmd.execute(&content),
        Command::Species(cmd) => cmd.execute(&content),
    }
}
