pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Mode;
use crate::error::AnalyzeError;
use crate::text::Sentiment;

/// Which analysis the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    #[default]
    Summarize,
    Sentiment,
    Keywords,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Summarize => "summarize",
            Task::Sentiment => "sentiment",
            Task::Keywords => "keywords",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task-specific result. Serialized without a tag: the envelope's `task`
/// says which shape `result` has.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Summary {
        summary: String,
        word_count: usize,
    },
    Sentiment {
        sentiment: Sentiment,
        confidence: f64,
    },
    Keywords {
        keywords: Vec<String>,
        count: usize,
    },
}

impl Analysis {
    pub fn task(&self) -> Task {
        match self {
            Analysis::Summary { .. } => Task::Summarize,
            Analysis::Sentiment { .. } => Task::Sentiment,
            Analysis::Keywords { .. } => Task::Keywords,
        }
    }

    /// Parse a JSON object into the result shape for `task`.
    ///
    /// A keyword reply without `count` gets the length of its list.
    pub fn from_json(task: Task, json: &str) -> serde_json::Result<Self> {
        Ok(match task {
            Task::Summarize => {
                let reply: SummaryReply = serde_json::from_str(json)?;
                Analysis::Summary {
                    summary: reply.summary,
                    word_count: reply.word_count,
                }
            }
            Task::Sentiment => {
                let reply: SentimentReply = serde_json::from_str(json)?;
                Analysis::Sentiment {
                    sentiment: reply.sentiment,
                    confidence: reply.confidence,
                }
            }
            Task::Keywords => {
                let reply: KeywordsReply = serde_json::from_str(json)?;
                let count = reply.count.unwrap_or(reply.keywords.len());
                Analysis::Keywords {
                    keywords: reply.keywords,
                    count,
                }
            }
        })
    }
}

#[derive(Deserialize)]
struct SummaryReply {
    summary: String,
    word_count: usize,
}

#[derive(Deserialize)]
struct SentimentReply {
    sentiment: Sentiment,
    confidence: f64,
}

#[derive(Deserialize)]
struct KeywordsReply {
    keywords: Vec<String>,
    count: Option<usize>,
}

/// Token accounting reported alongside every result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Usage with `total_tokens` derived from the two parts.
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// A result plus the tokens it cost.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub result: Analysis,
    pub usage: TokenUsage,
}

/// Something that can turn text into a task result: local heuristics, a
/// remote model, or a test double.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Reported as `mode` in every response.
    fn mode(&self) -> Mode;

    async fn analyze(&self, text: &str, task: Task) -> Result<AnalysisOutcome, AnalyzeError>;
}
