use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::AppState;
use crate::analyzer::{Analysis, Task, TokenUsage};
use crate::config::Mode;
use crate::consts::round2;
use crate::error::AnalyzeError;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub task: Task,
}

/// Uniform response wrapper around every result.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub mode: Mode,
    pub task: Task,
    pub result: Analysis,
    pub latency_ms: f64,
    pub tokens: TokenUsage,
}

/// `POST /analyze`. Malformed bodies never get here: the `Json` extractor
/// rejects them first.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Envelope>, AnalyzeError> {
    let mode = state.analyzer.mode();
    let task = request.task;
    let started = Instant::now();

    let outcome = state
        .analyzer
        .analyze(&request.text, task)
        .await
        .inspect_err(|e| error!(%mode, %task, error = %e, "analysis failed"))?;

    let latency_ms = round2(started.elapsed().as_secs_f64() * 1000.0);

    info!(
        %mode,
        %task,
        latency_ms,
        total_tokens = outcome.usage.total_tokens,
        "analysis complete"
    );

    Ok(Json(Envelope {
        mode,
        task,
        result: outcome.result,
        latency_ms,
        tokens: outcome.usage,
    }))
}
