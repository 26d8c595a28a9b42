//! Zip code search page server
//!
//! Usage:
//!   ./target/release/web_server [options]
//!
//! Options:
//!   --port PORT     Port to listen on (default: 8080)
//!   --data PATH     CSV dataset (default: bundled data)
//!   --mode MODE     exact, prefix or substring (default: exact)
//!
//! Endpoints:
//!   GET /                          Search page
//!   GET /search?q=CODE             Search page with results
//!   GET /api/v1/health             Health check
//!   GET /api/v1/stats              Dataset statistics
//!   GET /api/v1/search?q=CODE      Matching records as JSON
//!   GET /api/v1/zipcodes/:code     Single record

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zip_lookup::api::create_router;
use zip_lookup::{Dataset, LookupService, MatchMode};

#[derive(Parser, Debug)]
#[command(name = "web_server")]
#[command(about = "Serve the zip code search page")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// CSV file with `code,city,state` columns (defaults to the bundled dataset)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Matching policy: exact, prefix or substring
    #[arg(long, default_value = "exact")]
    mode: MatchMode,
}

fn print_banner(port: u16, records: usize, mode: MatchMode) {
    println!("============================================================");
    println!("                 ZIP CODE LOOKUP SERVER");
    println!("============================================================");
    println!();
    println!("  Page:     http://localhost:{}/", port);
    println!("  API:      http://localhost:{}/api/v1/", port);
    println!("  Records:  {}", records);
    println!("  Matching: {}", mode);
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .init();

    let args = Args::parse();

    let (dataset, report) = Dataset::load(args.data.as_deref())?;
    tracing::info!("Loaded {} zip codes ({} skipped)", report.loaded, report.skipped);
    if report.skipped > 0 {
        tracing::warn!("{} malformed row(s) were dropped from the dataset", report.skipped);
    }

    print_banner(args.port, dataset.len(), args.mode);

    let app = create_router(LookupService::new(dataset, args.mode));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down...");
}
