use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Analysis, AnalysisOutcome, Analyzer, Task, TokenUsage};
use crate::config::{Mode, ServerConfig};
use crate::consts::MAX_ERROR_BODY_CHARS;
use crate::error::AnalyzeError;

/// An analyzer that calls an OpenAI-compatible chat-completions API.
pub struct OpenAiAnalyzer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiAnalyzer {
    /// Build the client once; its connection pool is shared by all requests.
    ///
    /// A missing key is not an error here. Requests fail with
    /// [`AnalyzeError::MissingApiKey`] until one is configured.
    pub fn new(config: &ServerConfig, api_key: Option<String>) -> Result<Self, AnalyzeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn system_prompt(task: Task) -> &'static str {
        match task {
            Task::Summarize => "Summarize the text and return JSON with summary and word_count.",
            Task::Sentiment => "Analyze sentiment and return JSON with sentiment and confidence.",
            Task::Keywords => {
                "Extract meaningful keywords and phrases and return JSON with keywords list and count."
            }
        }
    }

    fn parse_reply(task: Task, content: &str) -> Result<Analysis, AnalyzeError> {
        Analysis::from_json(task, extract_json(content))
            .map_err(|source| AnalyzeError::InvalidReply { task, source })
    }
}

#[async_trait]
impl Analyzer for OpenAiAnalyzer {
    fn mode(&self) -> Mode {
        Mode::Real
    }

    async fn analyze(&self, text: &str, task: Task) -> Result<AnalysisOutcome, AnalyzeError> {
        let api_key = self.api_key.as_deref().ok_or(AnalyzeError::MissingApiKey)?;

        let body = ApiRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: Self::system_prompt(task),
                },
                Message {
                    role: "user",
                    content: text,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!(status, body = %body, "provider rejected request");
            return Err(AnalyzeError::Upstream {
                status,
                body: truncate_body(&body),
            });
        }

        let api_resp: ApiResponse = resp.json().await?;

        let content = api_resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AnalyzeError::EmptyReply)?;

        let result = Self::parse_reply(task, &content)?;
        let usage = api_resp.usage.map(TokenUsage::from).unwrap_or_default();

        debug!(
            model = %self.model,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "provider reply parsed"
        );

        Ok(AnalysisOutcome { result, usage })
    }
}

/// Clip a provider error body to [`MAX_ERROR_BODY_CHARS`] before it reaches a caller.
fn truncate_body(body: &str) -> String {
    let mut chars = body.trim().chars();
    let mut clipped: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        clipped.push_str("...");
    }
    clipped
}

/// Extract JSON from text that may be wrapped in markdown code fences.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }

    trimmed
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

impl From<Usage> for TokenUsage {
    fn from(usage: Usage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}
