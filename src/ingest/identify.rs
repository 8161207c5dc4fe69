// src/ingest/identify.rs
// Pure URL → identifier extraction. No I/O; runs before any fetch so bad
// input is rejected without touching the network.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::IngestError;

// Recognized video URL shapes, in priority order:
// https://www.youtube.com/watch?v=VIDEO_ID and https://youtu.be/VIDEO_ID
static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"v=([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap(),
    ]
});

static RE_ASIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").unwrap());

/// Extract the 11-character video id from a YouTube URL.
pub fn extract_video_id(url: &str) -> Result<String, IngestError> {
    for pat in VIDEO_ID_PATTERNS.iter() {
        if let Some(caps) = pat.captures(url) {
            return Ok(caps[1].to_string());
        }
    }
    Err(IngestError::invalid_url(url))
}

/// Convert a `/dp/` product URL into a `/product-reviews/` URL.
///
/// A URL that already points at a reviews page is returned unchanged, as is
/// one with no recognizable ASIN (the scrape will then miss and the caller
/// degrades to the fallback dataset).
pub fn to_reviews_url(url: &str) -> String {
    if url.contains("product-reviews") {
        return url.to_string();
    }

    match RE_ASIN.captures(url) {
        Some(caps) => format!("https://www.amazon.ca/product-reviews/{}", &caps[1]),
        None => url.to_string(),
    }
}
