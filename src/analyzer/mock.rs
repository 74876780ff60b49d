use async_trait::async_trait;

use super::{Analysis, AnalysisOutcome, Analyzer, Task, TokenUsage};
use crate::config::Mode;
use crate::consts::{MOCK_COMPLETION_TOKENS, word_count};
use crate::error::AnalyzeError;
use crate::text::{analyze_sentiment, extract_keywords};

/// Answers every task from local heuristics. Never fails.
pub struct MockAnalyzer;

impl MockAnalyzer {
    /// Compute the result for `task` without any token accounting.
    pub fn respond(text: &str, task: Task) -> Analysis {
        match task {
            Task::Summarize => Analysis::Summary {
                summary: format!("(MOCK) Summary of: {}", text),
                word_count: word_count(text),
            },
            Task::Sentiment => {
                let (sentiment, confidence) = analyze_sentiment(text);
                Analysis::Sentiment {
                    sentiment,
                    confidence,
                }
            }
            Task::Keywords => {
                let keywords = extract_keywords(text);
                let count = keywords.len();
                Analysis::Keywords { keywords, count }
            }
        }
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    fn mode(&self) -> Mode {
        Mode::Mock
    }

    async fn analyze(&self, text: &str, task: Task) -> Result<AnalysisOutcome, AnalyzeError> {
        let result = Self::respond(text, task);
        // prompt cost stands in as one token per word
        let usage = TokenUsage::new(word_count(text) as u64, MOCK_COMPLETION_TOKENS);
        Ok(AnalysisOutcome { result, usage })
    }
}
