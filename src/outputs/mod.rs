//! Output generation for scraped article records.
//!
//! # Submodules
//!
//! - [`json`]: Writes extracted records to sequence-numbered JSON snapshot
//!   files
//!
//! # Output Structure
//!
//! ```text
//! data/
//! ├── ign_news_001_20240101_083015.json
//! ├── ign_news_002_20240101_203302.json
//! └── ign_news_003_20240102_081144.json
//! ```
//!
//! The sequence number makes each run append-only with respect to prior
//! runs: a new snapshot never overwrites an old one unless an explicit
//! filename is supplied.

pub mod json;
