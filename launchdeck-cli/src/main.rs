// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Launchdeck CLI - SpaceX launch data from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Company profile (cached response first when available)
//! launchdeck company
//!
//! # First page of launches, latest first
//! launchdeck launches
//!
//! # Successful 2020 launches, earliest first, three pages
//! launchdeck launches --year 2020 --successful --sort ascending --pages 3
//!
//! # Everything matching a filter
//! launchdeck launches --year 2006 --all
//!
//! # JSON output
//! launchdeck launches --format json
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Definition
// ============================================================================

/// Launchdeck CLI - SpaceX launch data client.
#[derive(Parser)]
#[command(name = "launchdeck")]
#[command(about = "Certificate-pinned SpaceX launch data client")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the company profile.
    #[command(visible_alias = "c")]
    Company(commands::company::CompanyArgs),

    /// List launches with server-side filtering and paging.
    #[command(visible_alias = "l")]
    Launches(commands::launches::LaunchesArgs),
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON for scripting.
    Json,
}

// ============================================================================
// Entry point
// ============================================================================

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Company(args) => commands::company::run(args, cli.format).await,
        Commands::Launches(args) => commands::launches::run(args, cli.format).await,
    }
}
