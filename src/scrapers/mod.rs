//! News source scrapers.
//!
//! Each scraper follows the same pattern:
//!
//! 1. **Fetch**: one GET against the source's listing page with a
//!    browser-like `User-Agent`
//! 2. **Extract**: apply an ordered list of selector strategies to the
//!    parsed document and take the first strategy that matches anything
//!
//! Fetch failures are logged and degrade to an empty result set; extraction
//! itself is a pure function over the HTML so it can be tested offline.
//!
//! # Supported Sources
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | IGN    | [`ign`] | News listing page, capped at 10 articles per run |

pub mod ign;
