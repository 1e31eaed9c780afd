//! Binary entry point: one fetch → extract → save cycle.
//!
//! Runs a single scrape of the IGN news listing, writes the extracted
//! records to the next numbered JSON snapshot, and prints a human-readable
//! summary to stdout. Diagnostics go to `tracing` (filterable via
//! `RUST_LOG`); the summary block is part of the program's contract and is
//! always printed.

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use ign_news::cli::Cli;
use ign_news::error::ScrapeError;
use ign_news::outputs::json::save_records;
use ign_news::scrapers::ign::fetch_articles;

#[tokio::main]
async fn main() -> Result<(), ScrapeError> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ign_news starting up");

    let args = Cli::parse();
    debug!(?args.url, ?args.data_dir, ?args.filename, "Parsed CLI arguments");

    println!("Starting IGN scraper...");

    // Recognized fetch failures come back as an empty vector; an Err here is
    // the unexpected kind and is worth a non-zero exit.
    let records = fetch_articles(&args.url).await.inspect_err(|e| {
        error!(error = %e, "Unexpected failure while fetching articles");
    })?;

    if records.is_empty() {
        println!("No results found.");
        info!(elapsed = ?start_time.elapsed(), "Execution complete");
        return Ok(());
    }

    let saved = match save_records(&records, &args.data_dir, args.filename.as_deref()).await {
        Ok(path) => Some(path),
        Err(e) => {
            error!(error = %e, "Failed to save JSON snapshot");
            None
        }
    };

    println!("\nResults: {} articles scraped from IGN", records.len());
    match &saved {
        Some(path) => println!("Data saved to: {}", path.display()),
        None => println!("Failed to save data; see logs for details."),
    }

    println!("\nArticles:");
    for (i, record) in records.iter().enumerate() {
        println!("{}. {}", i + 1, record.title);
        println!("   URL: {}", record.url);
        println!();
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
