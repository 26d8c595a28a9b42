//! One-shot zip code lookup
//!
//! Usage:
//!   zip_lookup 90210
//!   zip_lookup --mode prefix 902
//!   zip_lookup --data my_codes.csv 02108

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use zip_lookup::{Dataset, LookupService, MatchMode, SearchController};

#[derive(Parser, Debug)]
#[command(name = "zip_lookup")]
#[command(about = "Look up city and state for a zip code")]
struct Args {
    /// Zip code to search for
    query: String,

    /// CSV file with `code,city,state` columns (defaults to the bundled dataset)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Matching policy: exact, prefix or substring
    #[arg(long, default_value = "exact")]
    mode: MatchMode,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (dataset, report) = Dataset::load(args.data.as_deref())?;
    info!("Loaded {} zip codes ({} skipped)", report.loaded, report.skipped);

    let mut controller = SearchController::new(LookupService::new(dataset, args.mode));
    let state = controller.submit(&args.query);
    println!("{}", state.render_text());

    Ok(())
}
