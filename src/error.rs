//! Error types for the scraper.
//!
//! The original error policy here is deliberately narrow: transport and
//! decode failures during the fetch are caught at the extractor boundary and
//! degrade to an empty result set, while anything outside those kinds
//! surfaces as a [`ScrapeError`] so programming errors are not masked as
//! zero-results.

use thiserror::Error;

/// All error kinds that can escape the scrape/save pipeline.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Unexpected failure in the HTTP request itself (not a recognized
    /// connect/timeout/request failure, which degrade to empty results).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Unexpected failure reading or decoding the response body.
    #[error("response decode error: {0}")]
    Decode(#[source] reqwest::Error),

    /// Filesystem error while creating the data directory, listing it, or
    /// writing a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while writing a snapshot.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
