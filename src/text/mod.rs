//! Local text heuristics backing mock mode.

mod keywords;
mod sentiment;

pub use keywords::extract_keywords;
pub use sentiment::{MAX_CONFIDENCE, Sentiment, analyze_sentiment};
