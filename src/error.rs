use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::analyzer::Task;

/// Failure while producing an analysis. Only real mode can fail.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("no API key configured; set OPENAI_API_KEY")]
    MissingApiKey,

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("provider returned an empty reply")]
    EmptyReply,

    #[error("provider reply is not a valid {task} result: {source}")]
    InvalidReply {
        task: Task,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            AnalyzeError::Transport(_)
            | AnalyzeError::Upstream { .. }
            | AnalyzeError::EmptyReply
            | AnalyzeError::InvalidReply { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
