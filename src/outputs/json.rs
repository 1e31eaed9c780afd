//! JSON snapshot persistence.
//!
//! Each run writes the extracted records as an indented JSON array to a file
//! named `ign_news_<seq>_<YYYYMMDD>_<HHMMSS>.json` inside the data
//! directory. The sequence number is one greater than the highest found
//! among existing snapshot files, so prior runs are never clobbered.
//!
//! Two concurrent runs can compute the same sequence number; the scan is
//! deliberately unguarded.

use crate::error::Result;
use crate::models::ArticleRecord;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Names that participate in sequence numbering, capturing the sequence.
static SNAPSHOT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ign_news_(\d+)_\d{8}_\d{6}\.json$").unwrap());

/// Compute the next snapshot sequence number from a directory listing.
///
/// Takes the file names as plain strings so the logic stays pure: callers
/// inject a real directory listing, tests inject whatever they like. Names
/// not matching the snapshot pattern are ignored.
pub fn next_sequence<I>(names: I) -> u32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let max_seq = names
        .into_iter()
        .filter_map(|name| {
            SNAPSHOT_NAME_RE
                .captures(name.as_ref())
                .and_then(|caps| caps[1].parse::<u32>().ok())
        })
        .max()
        .unwrap_or(0);
    max_seq + 1
}

/// Synthesize a snapshot filename from a sequence number and the current
/// local time.
fn snapshot_filename(seq: u32) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("ign_news_{seq:03}_{timestamp}.json")
}

/// Write article records to a JSON snapshot in `data_dir`.
///
/// Creates `data_dir` (and any missing ancestors) first. When `filename` is
/// `None`, the name is derived from the directory's existing snapshots via
/// [`next_sequence`]; an explicit `filename` bypasses the scan and will
/// overwrite a file of the same name.
///
/// # Returns
///
/// The path of the written file. Any I/O or serialization failure is logged
/// and returned as an error; callers treat it as a failure indicator rather
/// than aborting.
#[instrument(level = "info", skip_all, fields(data_dir = %data_dir.display()))]
pub async fn save_records(
    records: &[ArticleRecord],
    data_dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf> {
    if let Err(e) = fs::create_dir_all(data_dir).await {
        error!(error = %e, "Failed to create data directory");
        return Err(e.into());
    }

    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let mut names = Vec::new();
            let mut entries = fs::read_dir(data_dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            snapshot_filename(next_sequence(&names))
        }
    };

    let path = data_dir.join(&filename);
    let json = serde_json::to_string_pretty(records)?;

    info!(path = %path.display(), count = records.len(), "Writing JSON snapshot");
    if let Err(e) = fs::write(&path, json).await {
        error!(path = %path.display(), error = %e, "Failed to write JSON snapshot");
        return Err(e.into());
    }
    info!(path = %path.display(), "Wrote JSON snapshot");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: &str, url: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_next_sequence_empty_listing() {
        assert_eq!(next_sequence(Vec::<String>::new()), 1);
    }

    #[test]
    fn test_next_sequence_skips_gaps() {
        let names = [
            "ign_news_001_20240101_000000.json",
            "ign_news_003_20240102_000000.json",
        ];
        assert_eq!(next_sequence(names), 4);
    }

    #[test]
    fn test_next_sequence_ignores_foreign_names() {
        let names = [
            "notes.txt",
            "ign_news_007_20240101_000000.json.bak",
            "ign_news_20240101_000000.json",
            "ign_news_002_20240103_121212.json",
        ];
        assert_eq!(next_sequence(names), 3);
    }

    #[test]
    fn test_next_sequence_handles_wide_numbers() {
        let names = ["ign_news_1042_20240101_000000.json"];
        assert_eq!(next_sequence(names), 1043);
    }

    #[test]
    fn test_snapshot_filename_shape() {
        let name = snapshot_filename(7);
        assert!(SNAPSHOT_NAME_RE.is_match(&name));
        assert!(name.starts_with("ign_news_007_"));
    }

    #[tokio::test]
    async fn test_first_save_uses_sequence_one() {
        let dir = TempDir::new().unwrap();
        let records = vec![record("A", "https://www.ign.com/a")];

        let path = save_records(&records, dir.path(), None).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("ign_news_001_"));
    }

    #[tokio::test]
    async fn test_save_continues_from_highest_existing_sequence() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ign_news_001_20240101_000000.json"), "[]").unwrap();
        std::fs::write(dir.path().join("ign_news_003_20240102_000000.json"), "[]").unwrap();

        let records = vec![record("A", "https://www.ign.com/a")];
        let path = save_records(&records, dir.path(), None).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("ign_news_004_"));
    }

    #[tokio::test]
    async fn test_explicit_filename_bypasses_numbering() {
        let dir = TempDir::new().unwrap();
        let records = vec![record("A", "https://www.ign.com/a")];

        let path = save_records(&records, dir.path(), Some("latest.json"))
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("latest.json"));
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("data");

        let records = vec![record("A", "https://www.ign.com/a")];
        let path = save_records(&records, &nested, None).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_roundtrip_preserves_records() {
        let dir = TempDir::new().unwrap();
        let records = vec![
            record("Pokémon Légendes: Z-A — détails", "https://www.ign.com/articles/pokémon"),
            record("Plain ASCII headline", "https://www.ign.com/articles/plain"),
        ];

        let path = save_records(&records, dir.path(), None).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        // Indented output, non-ASCII preserved literally.
        assert!(raw.contains('\n'));
        assert!(raw.contains("Pokémon Légendes"));

        let back: Vec<ArticleRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, records);
    }
}
