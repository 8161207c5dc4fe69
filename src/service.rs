// src/service.rs
// The operation surface consumed by an embedding HTTP layer or CLI. The
// classifier is constructed once per process and injected here; the service
// itself is request-scoped state only.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::{SentimentClassifier, SentimentLabel};
use crate::config::ServiceConfig;
use crate::error::IngestError;
use crate::ingest::identify::extract_video_id;
use crate::ingest::{FetchLimit, Ingestor, SourceKind};
use crate::scoring::{score_batch, ScoredItem};

/// Applied by embedders when the caller states no preference. Still clamped
/// into the per-source range.
pub const DEFAULT_LIMIT: usize = 50;

/// Single-text analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub label: SentimentLabel,
    pub confidence: f32,
    pub model: String,
}

/// Analysis of one video's comment section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeAnalysis {
    pub video_id: String,
    pub total_fetched: usize,
    pub comments: Vec<ScoredItem>,
}

/// Analysis of one product's reviews. Never an error; a fully failed fetch
/// shows up as `total_fetched == 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmazonAnalysis {
    pub title: Option<String>,
    pub total_fetched: usize,
    pub reviews: Vec<ScoredItem>,
}

pub struct AnalysisService {
    classifier: Arc<dyn SentimentClassifier>,
    ingestor: Ingestor,
}

impl AnalysisService {
    pub fn new(classifier: Arc<dyn SentimentClassifier>, config: ServiceConfig) -> Self {
        Self {
            classifier,
            ingestor: Ingestor::new(config),
        }
    }

    /// Classify a single caller-supplied string.
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        let sentiment = self.classifier.classify(text);
        TextAnalysis {
            label: sentiment.label,
            confidence: sentiment.confidence,
            model: self.classifier.model_name().to_string(),
        }
    }

    /// Fetch and score comments for the video referenced by `url`.
    /// Identifier extraction happens before any network call, so a bad URL
    /// fails fast; credential and upstream errors propagate per source
    /// contract.
    pub async fn analyze_youtube_comments(
        &self,
        url: &str,
        limit: usize,
    ) -> Result<YouTubeAnalysis, IngestError> {
        let video_id = extract_video_id(url)?;
        let limit = FetchLimit::for_kind(SourceKind::YouTubeComments, limit);

        let result = self
            .ingestor
            .ingest(SourceKind::YouTubeComments, &video_id, limit)
            .await?;

        let comments = score_batch(self.classifier.as_ref(), result.items);
        info!(%video_id, total = comments.len(), "youtube analysis done");

        Ok(YouTubeAnalysis {
            video_id,
            total_fetched: comments.len(),
            comments,
        })
    }

    /// Fetch and score reviews for the product referenced by `url`. Never
    /// fails; the worst case is an empty, well-formed response.
    pub async fn analyze_amazon_reviews(&self, url: &str, limit: usize) -> AmazonAnalysis {
        let limit = FetchLimit::for_kind(SourceKind::AmazonReviews, limit);
        let result = self.ingestor.fetch_amazon(url, limit).await;

        let title = result.title;
        let reviews = score_batch(self.classifier.as_ref(), result.items);
        info!(total = reviews.len(), "amazon analysis done");

        AmazonAnalysis {
            title,
            total_fetched: reviews.len(),
            reviews,
        }
    }
}
