use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use sift::config::{Mode, ServerConfig};
use sift::consts::{
    API_KEY_ENV, DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_STATIC_DIR,
    DEFAULT_TIMEOUT_SECS,
};
use sift::{logging, server};

#[derive(Parser)]
#[command(name = "sift", version, about = "Summaries, sentiment and keywords over HTTP.")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "SIFT_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "SIFT_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Local heuristics (mock) or the chat-completions API (real)
    #[arg(short, long, env = "SIFT_MODE", value_enum, default_value_t = Mode::Mock)]
    mode: Mode,

    /// Model name sent to the provider (ignored in mock mode)
    #[arg(long, env = "SIFT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "SIFT_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Directory with index.html and static assets
    #[arg(long, env = "SIFT_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// Provider request timeout in seconds
    #[arg(short, long, env = "SIFT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Debug-level logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        mode: cli.mode,
        model: cli.model,
        api_base: cli.api_base,
        static_dir: cli.static_dir,
        timeout: Duration::from_secs(cli.timeout),
    };
    config.validate().context("invalid configuration")?;

    let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    if config.mode == Mode::Real && api_key.is_none() {
        warn!("{} is not set; /analyze will fail until it is", API_KEY_ENV);
    }
    if !config.static_dir.join("index.html").is_file() {
        warn!(
            "{} has no index.html; GET / will return 404",
            config.static_dir.display()
        );
    }

    let analyzer =
        server::build_analyzer(&config, api_key).context("failed to build analyzer")?;

    server::serve(&config, analyzer).await
}
