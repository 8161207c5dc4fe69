// src/ingest/types.rs
use serde::{Deserialize, Serialize};

/// One unit of text produced by a fetcher. Immutable once built; `ordinal`
/// is the source-assigned position among kept items, when the source has one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
    pub ordinal: Option<usize>,
}

impl TextItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ordinal: None,
        }
    }

    pub fn with_ordinal(text: impl Into<String>, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            ordinal: Some(ordinal),
        }
    }
}

/// Normalized fetch output, identical in shape for every source kind.
/// `items.len()` never exceeds the caller's limit; `title` is `None` when
/// unknown, never an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceResult {
    pub title: Option<String>,
    pub items: Vec<TextItem>,
}

impl SourceResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
