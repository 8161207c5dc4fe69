// src/lib.rs
// Public library surface for embedding services and integration tests.

pub mod classify;
pub mod config;
pub mod error;
pub mod ingest;
pub mod scoring;
pub mod service;

// ---- Re-exports for stable public API ----
pub use crate::classify::{LexiconClassifier, Sentiment, SentimentClassifier, SentimentLabel};
pub use crate::config::ServiceConfig;
pub use crate::error::IngestError;
pub use crate::ingest::types::{SourceResult, TextItem};
pub use crate::ingest::{FetchLimit, Ingestor, SourceKind};
pub use crate::scoring::ScoredItem;
pub use crate::service::{AmazonAnalysis, AnalysisService, TextAnalysis, YouTubeAnalysis};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR APP_ENV in {local, development, dev})
///   - ANALYZER_DEV_LOG=1
///
/// Loads `.env` first so YOUTUBE_API_KEY / FALLBACK_DATASET_PATH can be set
/// there during local runs.
pub fn enable_dev_tracing() {
    let _ = dotenvy::dotenv();

    let dev_flag = std::env::var("ANALYZER_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("APP_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_sentiment_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
