//! Launches command - filtered, paginated launch listing.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use launchdeck_core::{LaunchFilter, SortOrder};
use launchdeck_store::{DEFAULT_PAGE_SIZE, LaunchSession, LoadPhase};
use tracing::debug;

use crate::OutputFormat;
use crate::output::{JsonFormatter, TextFormatter};

/// Arguments for the launches command.
#[derive(Args, Default)]
pub struct LaunchesArgs {
    /// Restrict to launches in this calendar year (UTC).
    #[arg(long)]
    pub year: Option<i32>,

    /// Show successful launches only.
    #[arg(long)]
    pub successful: bool,

    /// Sort order by launch date.
    #[arg(long, value_enum, default_value = "descending")]
    pub sort: SortArg,

    /// Page size.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,

    /// Number of pages to accumulate.
    #[arg(long, default_value_t = 1, conflicts_with = "all")]
    pub pages: u32,

    /// Accumulate every available page.
    #[arg(long)]
    pub all: bool,
}

/// Sort order flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Earliest launch first.
    Ascending,
    /// Latest launch first.
    #[default]
    Descending,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Ascending => SortOrder::Ascending,
            SortArg::Descending => SortOrder::Descending,
        }
    }
}

/// Runs the launches command.
pub async fn run(args: &LaunchesArgs, format: OutputFormat) -> Result<()> {
    let api = Arc::new(super::build_api()?);
    let filter = LaunchFilter {
        year: args.year,
        successful_only: args.successful,
    };
    let session = LaunchSession::with_config(api, args.limit, filter, args.sort.into());

    session.load().await;
    check_phase(&session).await?;

    let mut loaded_pages = 1;
    while session.has_next_page().await && (args.all || loaded_pages < args.pages) {
        session.load_more().await;
        check_phase(&session).await?;
        loaded_pages += 1;
    }
    debug!(pages = loaded_pages, "Accumulation complete");

    let snapshot = session.snapshot().await;
    let view = session.projection().await;
    match format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new();
            print!("{}", formatter.format_launches(&view, snapshot.total_docs));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::launches(&view));
        }
    }
    Ok(())
}

async fn check_phase<A: launchdeck_core::LaunchDataApi>(session: &LaunchSession<A>) -> Result<()> {
    if session.phase().await == LoadPhase::Error {
        let message = session
            .error_message()
            .await
            .unwrap_or_else(|| "unknown error".to_string());
        bail!("launch query failed: {message}");
    }
    Ok(())
}
