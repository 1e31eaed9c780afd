//! # IGN News
//!
//! A small scraper that fetches the IGN news listing page, extracts up to
//! ten article title/URL pairs, and archives them as sequence-numbered,
//! timestamped JSON files.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one GET against the listing page with a browser-like
//!    `User-Agent` ([`scrapers::ign::fetch_articles`])
//! 2. **Extract**: ordered selector strategies with fallback, capped at ten
//!    records ([`scrapers::ign::extract_articles`])
//! 3. **Persist**: records serialized as an indented JSON array to the next
//!    numbered snapshot file ([`outputs::json::save_records`])
//!
//! Recognized network failures degrade to an empty result set; only
//! unexpected failures surface as [`error::ScrapeError`].

pub mod cli;
pub mod error;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;
