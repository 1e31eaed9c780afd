//! IGN news listing scraper.
//!
//! Fetches the [IGN news section](https://www.ign.com/news) and extracts up
//! to [`MAX_ARTICLES`] title/URL pairs from the listing markup.
//!
//! # Selector strategies
//!
//! IGN has changed its listing markup over time, so candidate elements are
//! located by trying an ordered list of [`Strategy`] values and keeping the
//! first one that matches at least once:
//!
//! 1. `div.content-item` - the current listing container
//! 2. `a.ArticleLink` - the older anchor-based markup
//!
//! The two result sets are never mixed.
//!
//! # URL normalization
//!
//! Listing links are usually site-relative (`/articles/...`); any extracted
//! link that does not already start with `http` gets [`IGN_BASE_URL`]
//! prepended.

use crate::error::{Result, ScrapeError};
use crate::models::ArticleRecord;
use crate::utils::{normalize_ws, truncate_for_log};
use once_cell::sync::Lazy;
use reqwest::header;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// The IGN news listing page.
pub const IGN_NEWS_URL: &str = "https://www.ign.com/news";

/// Origin used to resolve site-relative article links.
pub const IGN_BASE_URL: &str = "https://www.ign.com";

/// Browser-like identification sent with the listing request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Maximum number of articles extracted per run.
pub const MAX_ARTICLES: usize = 10;

/// One way of locating candidate article elements in the listing document.
struct Strategy {
    name: &'static str,
    selector: Selector,
}

/// Ordered list of selector strategies; the first one that matches at least
/// one element wins.
static STRATEGIES: Lazy<[Strategy; 2]> = Lazy::new(|| {
    [
        Strategy {
            name: "content-item",
            selector: Selector::parse("div.content-item").unwrap(),
        },
        Strategy {
            name: "article-link",
            selector: Selector::parse("a.ArticleLink").unwrap(),
        },
    ]
});

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static CONTENT_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.content-title").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Fetch the news listing and extract article records.
///
/// Issues a single GET with a browser-like `User-Agent` and hands the body to
/// [`extract_articles`]. Recognized fetch failures (connect/DNS/timeout,
/// non-success status, body decode) are logged and yield an empty vector;
/// anything else propagates as a [`ScrapeError`].
#[instrument(level = "info", skip_all, fields(url = %page_url))]
pub async fn fetch_articles(page_url: &Url) -> Result<Vec<ArticleRecord>> {
    info!(url = %page_url, "Fetching news listing");

    let client = reqwest::Client::new();
    let response = match client
        .get(page_url.clone())
        .header(header::USER_AGENT, USER_AGENT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) if e.is_connect() || e.is_timeout() || e.is_request() => {
            error!(error = %e, "Transport failure fetching listing; no results");
            return Ok(Vec::new());
        }
        Err(e) => return Err(ScrapeError::Transport(e)),
    };

    let status = response.status();
    info!(status = %status, "Listing response received");
    if !status.is_success() {
        warn!(status = %status, "Failed to fetch listing page");
        return Ok(Vec::new());
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if e.is_decode() || e.is_body() || e.is_timeout() => {
            error!(error = %e, "Failed to read listing body; no results");
            return Ok(Vec::new());
        }
        Err(e) => return Err(ScrapeError::Decode(e)),
    };

    Ok(extract_articles(&body))
}

/// Extract article records from listing HTML.
///
/// Pure over its input: applies the selector strategies in order, truncates
/// the winning match set to [`MAX_ARTICLES`], and emits a record for each
/// element with a non-empty title and link. Elements missing either are
/// skipped silently.
pub fn extract_articles(html: &str) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);

    let Some((strategy, matched)) = STRATEGIES.iter().find_map(|strategy| {
        let matched: Vec<ElementRef> = document.select(&strategy.selector).collect();
        (!matched.is_empty()).then_some((strategy, matched))
    }) else {
        info!("No selector strategy matched any elements");
        return Vec::new();
    };
    info!(
        strategy = strategy.name,
        count = matched.len(),
        "Matched article elements"
    );

    let mut records = Vec::new();
    for element in matched.into_iter().take(MAX_ARTICLES) {
        let Some(title) = extract_title(&element) else {
            debug!("Skipping element without a usable title");
            continue;
        };
        let Some(link) = extract_link(&element) else {
            debug!(title = %truncate_for_log(&title, 50), "Skipping element without a link");
            continue;
        };
        let url = resolve_url(&link);
        debug!(title = %truncate_for_log(&title, 50), %url, "Added article");
        records.push(ArticleRecord { title, url });
    }

    info!(count = records.len(), "Extracted article records");
    records
}

/// Pick the element's title text.
///
/// Precedence: first `h3` descendant with non-empty text, then first
/// `span.content-title` descendant, then the element's own full text.
fn extract_title(element: &ElementRef) -> Option<String> {
    for selector in [&*HEADING, &*CONTENT_TITLE] {
        if let Some(sub) = element.select(selector).next() {
            let text = normalize_ws(&sub.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    let text = normalize_ws(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

/// Pick the element's article link.
///
/// The element's own `href` if it is an anchor, otherwise the `href` of its
/// first anchor descendant. Empty hrefs count as absent.
fn extract_link(element: &ElementRef) -> Option<String> {
    let href = if element.value().name() == "a" {
        element.value().attr("href")
    } else {
        element
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
    };
    href.filter(|href| !href.is_empty()).map(str::to_string)
}

/// Resolve a listing link to an absolute URL.
fn resolve_url(link: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else {
        format!("{IGN_BASE_URL}{link}")
    }
}
