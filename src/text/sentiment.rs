use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{round2, split_words};

const POSITIVE_WORDS: &[&str] = &["good", "happy", "great", "excellent", "love", "amazing"];
const NEGATIVE_WORDS: &[&str] = &["bad", "sad", "terrible", "hate", "angry", "awful"];

/// Upper bound on any reported confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

const TIE_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[serde(alias = "Positive", alias = "POSITIVE")]
    Positive,
    #[serde(alias = "Negative", alias = "NEGATIVE")]
    Negative,
    #[serde(alias = "Neutral", alias = "NEUTRAL")]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label text by counting fixed positive and negative words.
///
/// Matching is on whole lowercased tokens, so `"amazing!"` does not count.
/// A tie, including no matches at all, is neutral at 0.5.
pub fn analyze_sentiment(text: &str) -> (Sentiment, f64) {
    let lowered = text.to_lowercase();
    let mut positive = 0u32;
    let mut negative = 0u32;

    for word in split_words(&lowered) {
        if POSITIVE_WORDS.contains(&word) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        Ordering::Greater => (Sentiment::Positive, confidence(positive)),
        Ordering::Less => (Sentiment::Negative, confidence(negative)),
        Ordering::Equal => (Sentiment::Neutral, TIE_CONFIDENCE),
    }
}

fn confidence(matches: u32) -> f64 {
    round2(0.6 + f64::from(matches) * 0.1).min(MAX_CONFIDENCE)
}
