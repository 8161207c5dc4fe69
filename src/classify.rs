// src/classify.rs
// The classifier seam. Ingestion and scoring only ever see the
// `SentimentClassifier` trait, so the bundled lexicon model can be swapped
// for a real ML backend without touching the pipeline.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// One classifier verdict: a label and a confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub confidence: f32,
}

/// Contract for sentiment backends. Assumed total over non-empty strings.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Sentiment;

    /// Human-readable backend name, reported in single-text responses.
    fn model_name(&self) -> &'static str;
}

/// Lexicon-backed classifier. Loaded once per process and injected into the
/// service; holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }

    /// Raw lexicon score. Negation: a negator within the previous 1..=3
    /// tokens inverts the sign of the current word's score.
    fn score_text(&self, text: &str) -> i32 {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score: i32 = 0;

        for i in 0..tokens.len() {
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            let base = self.word_score(tokens[i].as_str());
            if base != 0 {
                score += if negated { -base } else { base };
            }
        }

        score
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Sentiment {
        let score = self.score_text(text);
        let label = match score.signum() {
            1 => SentimentLabel::Positive,
            -1 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        };
        // Confidence grows with the magnitude of lexicon evidence.
        let confidence = if score == 0 {
            0.5
        } else {
            (0.55 + 0.07 * score.unsigned_abs() as f32).min(0.99)
        };
        Sentiment { label, confidence }
    }

    fn model_name(&self) -> &'static str {
        "lexicon-v1"
    }
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "isn't" | "wasn't" | "aren't" | "won't" | "can't" | "cannot"
            | "without"
    )
}
