// src/error.rs
// Error taxonomy for the ingestion pipeline. Scrape-path and fallback-path
// failures never surface here; they degrade to empty results instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// No recognized identifier pattern matched the URL. Raised before any
    /// network call is attempted.
    #[error("could not extract a resource identifier from URL: {url}")]
    InvalidUrl { url: String },

    /// The credential required by the paginated-API source is absent.
    #[error("{var} environment variable is not set")]
    MissingApiKey { var: &'static str },

    /// A page request was rejected upstream. Partial results accumulated
    /// before this point are discarded.
    #[error("upstream API error: {status} {body}")]
    Upstream { status: u16, body: String },

    /// The page request never produced a response (DNS, connect, timeout).
    /// Fatal for the API source; the scrape source swallows these instead.
    #[error("transport error calling upstream API")]
    Transport(#[from] reqwest::Error),
}

impl IngestError {
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let e = IngestError::MissingApiKey {
            var: "YOUTUBE_API_KEY",
        };
        assert!(e.to_string().contains("YOUTUBE_API_KEY"));

        let e = IngestError::Upstream {
            status: 403,
            body: "quotaExceeded".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("403") && msg.contains("quotaExceeded"));
    }
}
