// src/ingest/providers/amazon.rs
// Scrape-based fetcher for Amazon review pages. Best effort by contract:
// every transport, status, or parse problem degrades to an empty result and
// the orchestrator decides what to do next.

use std::time::Duration;

use metrics::counter;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::ingest::identify::to_reviews_url;
use crate::ingest::normalize_text;
use crate::ingest::types::{SourceResult, TextItem};

// Short timeout so a blocked or throttled page never stalls a request.
const SCRAPE_TIMEOUT: Duration = Duration::from_secs(8);

// Browser-like headers; helps a little against blocking.
const BROWSER_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const ACCEPT_LANG: &str = "en-US,en;q=0.9";

pub struct AmazonReviewFetcher {
    client: reqwest::Client,
}

impl AmazonReviewFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch up to `limit` review texts from a product or reviews URL.
    /// Never errors; any failure yields an empty `SourceResult`.
    pub async fn fetch(&self, url: &str, limit: usize) -> SourceResult {
        let reviews_url = to_reviews_url(url);

        let resp = match self
            .client
            .get(&reviews_url)
            .header(USER_AGENT, BROWSER_UA)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANG)
            .timeout(SCRAPE_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = ?e, url = %reviews_url, "amazon scrape transport error");
                counter!("ingest_provider_errors_total").increment(1);
                return SourceResult::empty();
            }
        };

        if !resp.status().is_success() {
            // Blocked / captcha / throttled.
            warn!(status = %resp.status(), url = %reviews_url, "amazon scrape rejected");
            counter!("ingest_provider_errors_total").increment(1);
            return SourceResult::empty();
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = ?e, url = %reviews_url, "amazon scrape body error");
                counter!("ingest_provider_errors_total").increment(1);
                return SourceResult::empty();
            }
        };

        let out = parse_reviews_page(&body, limit);
        debug!(count = out.items.len(), url = %reviews_url, "amazon scrape parsed");
        out
    }
}

/// Parse a reviews-page document: the product title (when present) and
/// review bodies in document order, stopping at `limit`.
pub fn parse_reviews_page(html: &str, limit: usize) -> SourceResult {
    let document = Html::parse_document(html);
    let title_sel = Selector::parse("#productTitle").expect("valid title selector");
    let body_sel =
        Selector::parse(r#"span[data-hook="review-body"]"#).expect("valid review selector");

    let title = document
        .select(&title_sel)
        .next()
        .map(|el| normalize_text(&el.text().collect::<Vec<_>>().join(" ")))
        .filter(|t| !t.is_empty());

    let mut items = Vec::new();
    for el in document.select(&body_sel) {
        let text = normalize_text(&el.text().collect::<Vec<_>>().join(" "));
        if text.is_empty() {
            continue;
        }
        items.push(TextItem::with_ordinal(text, items.len()));
        if items.len() >= limit {
            break;
        }
    }

    counter!("ingest_items_total", "source" => "amazon").increment(items.len() as u64);
    SourceResult { title, items }
}
