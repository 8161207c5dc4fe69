// src/config.rs
// Environment-backed settings. Load `.env` first (dev convenience) via
// `enable_dev_tracing` or the embedding service.

use std::env;
use std::path::PathBuf;

use crate::ingest::fallback::DEFAULT_DATASET_PATH;

pub const ENV_YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";
pub const ENV_FALLBACK_DATASET_PATH: &str = "FALLBACK_DATASET_PATH";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Credential for the paginated-API source. Only that source needs it;
    /// absence is checked before any network call.
    pub youtube_api_key: Option<String>,
    /// Static dataset backing the scrape source's degrade path.
    pub fallback_dataset: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let youtube_api_key = env::var(ENV_YOUTUBE_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty());
        let fallback_dataset = env::var(ENV_FALLBACK_DATASET_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));

        Self {
            youtube_api_key,
            fallback_dataset,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            fallback_dataset: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}
