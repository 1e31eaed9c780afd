//! Command-line interface definitions for the IGN news scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default that matches the scraper's fixed behavior, so
//! running with no arguments performs a standard fetch-extract-save cycle.

use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::scrapers::ign::IGN_NEWS_URL;

/// Command-line arguments for the IGN news scraper.
///
/// # Examples
///
/// ```sh
/// # Standard run: scrape IGN news, write the next numbered snapshot to ./data
/// ign_news
///
/// # Write snapshots somewhere else
/// ign_news --data-dir /var/lib/ign_news
///
/// # Pin the output filename (overwrites on collision, skips numbering)
/// ign_news --filename latest.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News listing page to scrape
    #[arg(short, long, default_value = IGN_NEWS_URL)]
    pub url: Url,

    /// Directory where JSON snapshots are written
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Explicit output filename; bypasses sequence numbering
    #[arg(short, long)]
    pub filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ign_news"]);

        assert_eq!(cli.url.as_str(), "https://www.ign.com/news");
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert!(cli.filename.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "ign_news",
            "--url",
            "http://127.0.0.1:8080/news",
            "--data-dir",
            "/tmp/snapshots",
            "--filename",
            "latest.json",
        ]);

        assert_eq!(cli.url.as_str(), "http://127.0.0.1:8080/news");
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/snapshots"));
        assert_eq!(cli.filename.as_deref(), Some("latest.json"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["ign_news", "-d", "/tmp/data", "-f", "out.json"]);

        assert_eq!(cli.data_dir, PathBuf::from("/tmp/data"));
        assert_eq!(cli.filename.as_deref(), Some("out.json"));
    }
}
