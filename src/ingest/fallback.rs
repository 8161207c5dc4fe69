// src/ingest/fallback.rs
// Static dataset reader backing the scrape source. Read-only, bounded, and
// deliberately quiet: a missing or corrupt file means "no items", never an
// error, so the orchestrator treats it exactly like an empty live fetch.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::ingest::types::{SourceResult, TextItem};

/// Title attached whenever the fallback yields at least one item.
pub const FALLBACK_TITLE: &str = "Sample Amazon Product (local dataset)";

/// Default dataset location, relative to the process working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/sample_amazon_reviews.csv";

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    text: String,
}

/// Read up to `limit` non-empty rows from the dataset at `path`.
pub fn load_reviews(path: &Path, limit: usize) -> SourceResult {
    let items = match read_rows(path, limit) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = ?e, path = %path.display(), "fallback dataset unreadable");
            return SourceResult::empty();
        }
    };

    if items.is_empty() {
        return SourceResult::empty();
    }

    SourceResult {
        title: Some(FALLBACK_TITLE.to_string()),
        items,
    }
}

fn read_rows(path: &Path, limit: usize) -> Result<Vec<TextItem>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening fallback dataset {}", path.display()))?;

    let mut items = Vec::new();
    for row in reader.deserialize::<Row>() {
        // A malformed row poisons the whole read; partial fallback data is
        // not worth distinguishing from none.
        let row = row.context("reading fallback dataset row")?;
        let text = row.text.trim();
        if text.is_empty() {
            continue;
        }
        items.push(TextItem::with_ordinal(text, items.len()));
        if items.len() >= limit {
            break;
        }
    }
    Ok(items)
}
