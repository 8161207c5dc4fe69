// src/ingest/providers/youtube.rs
// Paginated fetcher for YouTube top-level comments via the Data API v3.
// Unlike the scrape source there is no fallback here: a missing credential
// or a rejected page is a hard error, and anything accumulated before the
// rejection is discarded.

use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use serde::Deserialize;
use tracing::debug;

use crate::error::IngestError;
use crate::ingest::normalize_text;
use crate::ingest::types::TextItem;

pub const PAGE_SIZE: usize = 50;

const ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/commentThreads";
const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub items: Vec<Thread>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Thread {
    pub snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSnippet {
    pub top_level_comment: Comment,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
}

/// One page of the comment listing. The seam exists so the pagination loop
/// is testable without a network.
#[async_trait]
pub trait CommentListing {
    async fn list_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, IngestError>;
}

pub struct YouTubeApi {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeApi {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl CommentListing for YouTubeApi {
    async fn list_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, IngestError> {
        let mut params: Vec<(&str, &str)> = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("key", &self.api_key),
            ("maxResults", "50"),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let resp = self
            .client
            .get(ENDPOINT)
            .query(&params)
            .timeout(PAGE_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            counter!("ingest_provider_errors_total").increment(1);
            return Err(IngestError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let page = resp.json::<CommentPage>().await?;
        Ok(page)
    }
}

/// Walk the listing until `limit` comments are collected or the upstream
/// reports no further page. Bounded: at most `limit.div_ceil(PAGE_SIZE) + 1`
/// requests, so a repeating continuation token cannot hang the loop.
pub async fn collect_comments<A>(
    api: &A,
    video_id: &str,
    limit: usize,
) -> Result<Vec<TextItem>, IngestError>
where
    A: CommentListing + ?Sized,
{
    let max_pages = limit.div_ceil(PAGE_SIZE) + 1;

    let mut items: Vec<TextItem> = Vec::new();
    let mut page_token: Option<String> = None;

    for _ in 0..max_pages {
        if items.len() >= limit {
            break;
        }

        let page = api.list_page(video_id, page_token.as_deref()).await?;

        for thread in page.items {
            let text = normalize_text(&thread.snippet.top_level_comment.snippet.text_display);
            if text.is_empty() {
                continue;
            }
            items.push(TextItem::with_ordinal(text, items.len()));
            if items.len() >= limit {
                break;
            }
        }

        page_token = page.next_page_token;
        if page_token.is_none() {
            break;
        }
    }

    debug!(video_id, count = items.len(), "youtube comments collected");
    counter!("ingest_items_total", "source" => "youtube").increment(items.len() as u64);
    Ok(items)
}
