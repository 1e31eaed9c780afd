//! Data models for scraped news articles.
//!
//! The scraper produces exactly one kind of value: [`ArticleRecord`], a
//! title/URL pair extracted from the news listing page. Records are held in
//! document order and serialized verbatim as a JSON array.

use serde::{Deserialize, Serialize};

/// One article extracted from the news listing.
///
/// A record is only constructed once both fields are known to be non-empty:
/// the extractor skips listing elements that are missing a usable title or
/// link rather than emitting partial records.
///
/// # Fields
///
/// * `title` - The article headline, whitespace-normalized
/// * `url` - The absolute article URL (relative links are resolved against
///   the site origin before a record is built)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article headline.
    pub title: String,
    /// The absolute URL of the article.
    pub url: String,
}
