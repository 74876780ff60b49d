//! HTTP surface: `POST /analyze`, the frontend at `/`, and assets under
//! `/static`.
//!
//! The analyzer is chosen once from [`ServerConfig::mode`] and shared
//! read-only by every request.

pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get_service, post};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analyzer::Analyzer;
use crate::analyzer::mock::MockAnalyzer;
use crate::analyzer::openai::OpenAiAnalyzer;
use crate::config::{Mode, ServerConfig};
use crate::error::AnalyzeError;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }
}

/// Pick the analyzer for the configured mode.
pub fn build_analyzer(
    config: &ServerConfig,
    api_key: Option<String>,
) -> Result<Arc<dyn Analyzer>, AnalyzeError> {
    Ok(match config.mode {
        Mode::Mock => Arc::new(MockAnalyzer),
        Mode::Real => Arc::new(OpenAiAnalyzer::new(config, api_key)?),
    })
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get_service(ServeFile::new(static_dir.join("index.html"))))
        .route("/analyze", post(handlers::analyze))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: &ServerConfig, analyzer: Arc<dyn Analyzer>) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = %config.mode,
        model = %config.model,
        static_dir = %config.static_dir.display(),
        "listening on http://{}",
        addr
    );

    let app = router(AppState::new(analyzer), &config.static_dir);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    // if the handler cannot be installed, run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
