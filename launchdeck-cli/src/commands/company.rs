//! Company command - fetch and display the company profile.

use anyhow::Result;
use clap::Args;
use futures::{StreamExt, pin_mut};
use launchdeck_core::{Company, LaunchDataApi};
use tracing::debug;

use crate::OutputFormat;
use crate::output::{JsonFormatter, TextFormatter};

/// Arguments for the company command.
#[derive(Args, Default)]
pub struct CompanyArgs {
    /// Skip the cached response and wait for the network.
    #[arg(long)]
    pub no_cache: bool,
}

/// Runs the company command.
pub async fn run(args: &CompanyArgs, format: OutputFormat) -> Result<()> {
    let api = super::build_api()?;

    if args.no_cache {
        let company = api.fetch_company().await?;
        print_company(&company, format, false);
        return Ok(());
    }

    // Cached profile first (when present), overwritten by the fresh one.
    // In JSON mode only the authoritative element is printed so the output
    // stays a single document.
    let stream = api.fetch_company_with_cache();
    pin_mut!(stream);

    let mut fresh: Option<Company> = None;
    let mut provisional_shown = false;
    while let Some(item) = stream.next().await {
        let company = item?;
        match format {
            OutputFormat::Text => {
                if provisional_shown {
                    println!();
                }
                print_company(&company, format, provisional_shown);
                provisional_shown = true;
            }
            OutputFormat::Json => fresh = Some(company),
        }
    }

    if let Some(company) = fresh {
        print_company(&company, format, false);
    }
    debug!("Company command complete");
    Ok(())
}

fn print_company(company: &Company, format: OutputFormat, fresh_after_cached: bool) {
    match format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new();
            if fresh_after_cached {
                println!("(updated from network)");
            }
            print!("{}", formatter.format_company(company));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::company(company));
        }
    }
}
