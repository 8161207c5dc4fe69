// Pagination-loop behavior, exercised through the `CommentListing` seam so
// no network is involved.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use review_sentiment_analyzer::ingest::providers::youtube::{
    collect_comments, CommentListing, CommentPage, PAGE_SIZE,
};
use review_sentiment_analyzer::IngestError;

fn page_json(texts: &[&str], next_token: Option<&str>) -> CommentPage {
    let items: Vec<serde_json::Value> = texts
        .iter()
        .map(|t| {
            serde_json::json!({
                "snippet": {"topLevelComment": {"snippet": {"textDisplay": t}}}
            })
        })
        .collect();
    let mut v = serde_json::json!({ "items": items });
    if let Some(tok) = next_token {
        v["nextPageToken"] = serde_json::json!(tok);
    }
    serde_json::from_value(v).expect("valid page shape")
}

/// Faulty upstream that returns a full page with the same token forever.
struct RepeatingTokenApi {
    calls: AtomicUsize,
}

#[async_trait]
impl CommentListing for RepeatingTokenApi {
    async fn list_page(
        &self,
        _video_id: &str,
        _page_token: Option<&str>,
    ) -> Result<CommentPage, IngestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let texts: Vec<String> = (0..PAGE_SIZE).map(|i| format!("comment {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        Ok(page_json(&refs, Some("SAME_TOKEN")))
    }
}

/// Two pages then end-of-results (no token on the second page).
struct TwoPageApi;

#[async_trait]
impl CommentListing for TwoPageApi {
    async fn list_page(
        &self,
        _video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, IngestError> {
        match page_token {
            None => Ok(page_json(&["first", "", "second"], Some("P2"))),
            Some("P2") => Ok(page_json(&["third"], None)),
            Some(other) => panic!("unexpected token {other}"),
        }
    }
}

struct RejectingApi;

#[async_trait]
impl CommentListing for RejectingApi {
    async fn list_page(
        &self,
        _video_id: &str,
        _page_token: Option<&str>,
    ) -> Result<CommentPage, IngestError> {
        Err(IngestError::Upstream {
            status: 403,
            body: "quotaExceeded".to_string(),
        })
    }
}

#[tokio::test]
async fn repeating_token_cannot_hang_the_loop() {
    let api = RepeatingTokenApi {
        calls: AtomicUsize::new(0),
    };
    let limit = 120;
    let items = collect_comments(&api, "vid", limit).await.expect("ok");

    assert_eq!(items.len(), limit, "never more than the requested limit");
    let max_requests = limit.div_ceil(PAGE_SIZE) + 1;
    assert!(
        api.calls.load(Ordering::SeqCst) <= max_requests,
        "loop must stay within its request bound"
    );
}

#[tokio::test]
async fn limit_one_issues_a_single_request() {
    let api = RepeatingTokenApi {
        calls: AtomicUsize::new(0),
    };
    let items = collect_comments(&api, "vid", 1).await.expect("ok");
    assert_eq!(items.len(), 1);
    assert_eq!(api.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn stops_when_upstream_has_no_more_pages() {
    let items = collect_comments(&TwoPageApi, "vid", 500).await.expect("ok");
    let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
    // Empty comment on page one is skipped; order follows the pages.
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(items[2].ordinal, Some(2));
}

#[tokio::test]
async fn upstream_rejection_discards_everything() {
    let err = collect_comments(&RejectingApi, "vid", 10)
        .await
        .expect_err("must fail");
    match err {
        IngestError::Upstream { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("quotaExceeded"));
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}
