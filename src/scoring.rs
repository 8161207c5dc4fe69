// src/scoring.rs
// Batch scorer: pure orchestration over the classifier seam. One output per
// input, same order, no cross-item state.

use serde::{Deserialize, Serialize};

use crate::classify::{SentimentClassifier, SentimentLabel};
use crate::ingest::types::TextItem;

/// Sentiment result for a single text item (comment/review).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredItem {
    pub text: String,
    pub label: SentimentLabel,
    pub confidence: f32,
}

pub fn score_batch(classifier: &dyn SentimentClassifier, items: Vec<TextItem>) -> Vec<ScoredItem> {
    items
        .into_iter()
        .map(|item| {
            let sentiment = classifier.classify(&item.text);
            ScoredItem {
                text: item.text,
                label: sentiment.label,
                confidence: sentiment.confidence,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Sentiment;

    /// Deterministic fake: label depends on the first byte of the text.
    struct FakeClassifier;

    impl SentimentClassifier for FakeClassifier {
        fn classify(&self, text: &str) -> Sentiment {
            let label = match text.as_bytes().first() {
                Some(b'p') => SentimentLabel::Positive,
                Some(b'n') => SentimentLabel::Negative,
                _ => SentimentLabel::Neutral,
            };
            Sentiment {
                label,
                confidence: 0.75,
            }
        }

        fn model_name(&self) -> &'static str {
            "fake"
        }
    }

    #[test]
    fn output_preserves_input_order() {
        let items = vec![
            TextItem::new("alpha"),
            TextItem::new("beta"),
            TextItem::new("charlie"),
        ];
        let out = score_batch(&FakeClassifier, items);
        let texts: Vec<&str> = out.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta", "charlie"]);
    }

    #[test]
    fn one_output_per_input_with_fake_labels() {
        let items = vec![TextItem::new("positive stuff"), TextItem::new("negative")];
        let out = score_batch(&FakeClassifier, items);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].label, SentimentLabel::Positive);
        assert_eq!(out[1].label, SentimentLabel::Negative);
        assert!(out.iter().all(|s| s.confidence == 0.75));
    }

    #[test]
    fn empty_batch_is_fine() {
        let out = score_batch(&FakeClassifier, Vec::new());
        assert!(out.is_empty());
    }
}
