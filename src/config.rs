//! Runtime configuration, fixed at startup.
//!
//! The binary fills a [`ServerConfig`] from CLI flags and environment
//! variables, validates it once, and hands it to the server. Nothing reads
//! configuration after that.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_STATIC_DIR,
    DEFAULT_TIMEOUT_SECS,
};

/// Where analysis results come from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local heuristics, no network.
    #[default]
    Mock,
    /// Delegate to the chat-completions API.
    Real,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mock => "mock",
            Mode::Real => "real",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub mode: Mode,
    /// Model name sent to the provider (ignored in mock mode).
    pub model: String,
    /// Base URL of the OpenAI-compatible API, without the `/chat/completions` suffix.
    pub api_base: String,
    /// Directory holding `index.html` and the assets served under `/static`.
    pub static_dir: PathBuf,
    /// Provider request timeout.
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mode: Mode::default(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings that would only fail later, mid-request.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("host cannot be empty");
        }
        if self.model.trim().is_empty() {
            bail!("model cannot be empty");
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            bail!("api base must start with http:// or https:// (got {:?})", self.api_base);
        }
        if self.timeout.is_zero() {
            bail!("timeout must be greater than zero");
        }
        Ok(())
    }
}
