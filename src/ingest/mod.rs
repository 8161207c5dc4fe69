// src/ingest/mod.rs
pub mod fallback;
pub mod identify;
pub mod providers;
pub mod types;

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use crate::config::ServiceConfig;
use crate::error::IngestError;
use crate::ingest::providers::amazon::AmazonReviewFetcher;
use crate::ingest::providers::youtube::{self, YouTubeApi};
use crate::ingest::types::SourceResult;

/// One-time metrics registration (so series show up on whatever recorder the
/// embedding service installs).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("ingest_items_total", "Items kept from live fetches.");
        describe_counter!(
            "ingest_fallback_total",
            "Fetches that degraded to the local dataset."
        );
        describe_counter!(
            "ingest_provider_errors_total",
            "Transport/status/parse errors from live sources."
        );
    });
}

/// The two supported ingestion strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Live scrape of a review page, degrading to the local dataset.
    AmazonReviews,
    /// Paginated Data API listing; hard-fails on credential/upstream errors.
    YouTubeComments,
}

/// Caller-supplied item cap, clamped into the valid range for its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimit(usize);

impl FetchLimit {
    pub const AMAZON_MAX: usize = 200;
    pub const YOUTUBE_MAX: usize = 500;

    pub fn for_kind(kind: SourceKind, requested: usize) -> Self {
        let max = match kind {
            SourceKind::AmazonReviews => Self::AMAZON_MAX,
            SourceKind::YouTubeComments => Self::YOUTUBE_MAX,
        };
        Self(requested.clamp(1, max))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Normalize text: decode entities, strip tags, collapse whitespace, trim.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, " ").to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

/// Fetch entry point. Holds the shared HTTP client and config; no mutable
/// state crosses requests.
pub struct Ingestor {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl Ingestor {
    pub fn new(config: ServiceConfig) -> Self {
        ensure_metrics_described();
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Uniform entry: `reference` is a URL for the scrape kind and a video
    /// id for the API kind. The Amazon arm cannot fail; YouTube errors
    /// propagate unchanged.
    pub async fn ingest(
        &self,
        kind: SourceKind,
        reference: &str,
        limit: FetchLimit,
    ) -> Result<SourceResult, IngestError> {
        match kind {
            SourceKind::AmazonReviews => Ok(self.fetch_amazon(reference, limit).await),
            SourceKind::YouTubeComments => self.fetch_youtube(reference, limit).await,
        }
    }

    /// Scrape first; if that yields nothing, read the local dataset. Empty
    /// output from both is still a success.
    pub async fn fetch_amazon(&self, url: &str, limit: FetchLimit) -> SourceResult {
        let fetcher = AmazonReviewFetcher::new(self.client.clone());
        let live = fetcher.fetch(url, limit.get()).await;
        if !live.is_empty() {
            return live;
        }

        counter!("ingest_fallback_total").increment(1);
        tracing::info!(url, "live scrape empty, using fallback dataset");
        fallback::load_reviews(&self.config.fallback_dataset, limit.get())
    }

    /// No fallback here: degrading a credential or quota problem to "zero
    /// comments" would hide a real misconfiguration.
    pub async fn fetch_youtube(
        &self,
        video_id: &str,
        limit: FetchLimit,
    ) -> Result<SourceResult, IngestError> {
        let api_key = self
            .config
            .youtube_api_key
            .clone()
            .ok_or(IngestError::MissingApiKey {
                var: crate::config::ENV_YOUTUBE_API_KEY,
            })?;

        let api = YouTubeApi::new(self.client.clone(), api_key);
        let items = youtube::collect_comments(&api, video_id, limit.get()).await?;
        Ok(SourceResult { title: None, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_collapses_ws_and_entities() {
        let s = "  Hello,&nbsp;&nbsp; <b>world</b>  ";
        assert_eq!(normalize_text(s), "Hello, world");
    }

    #[test]
    fn normalize_text_empty_stays_empty() {
        assert_eq!(normalize_text("  <br/>  "), "");
    }

    #[test]
    fn limits_clamp_per_kind() {
        assert_eq!(FetchLimit::for_kind(SourceKind::AmazonReviews, 0).get(), 1);
        assert_eq!(
            FetchLimit::for_kind(SourceKind::AmazonReviews, 1000).get(),
            FetchLimit::AMAZON_MAX
        );
        assert_eq!(
            FetchLimit::for_kind(SourceKind::YouTubeComments, 1000).get(),
            FetchLimit::YOUTUBE_MAX
        );
        assert_eq!(
            FetchLimit::for_kind(SourceKind::YouTubeComments, 50).get(),
            50
        );
    }
}
