// =============================================================================
// Buda-Bot — Main Entry Point
// =============================================================================
//
// Interactive terminal client for the Buda exchange public API.  The UI is
// written to stdout; diagnostics go to stderr through `tracing` and are quiet
// (warn and above) unless RUST_LOG says otherwise.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod buda;
mod render;
mod report;
mod runtime_config;
mod session;
mod trades;
mod types;

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::buda::BudaClient;
use crate::runtime_config::{RuntimeConfig, DEFAULT_CONFIG_PATH};
use crate::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── 2. Config ────────────────────────────────────────────────────────
    let config_path = std::env::var("BUDA_BOT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = if config_path.exists() {
        RuntimeConfig::load(&config_path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            RuntimeConfig::default()
        })
    } else {
        info!(path = %config_path.display(), "No config file, using defaults");
        RuntimeConfig::default()
    };

    if let Ok(url) = std::env::var("BUDA_API_URL") {
        config = config.with_api_base_url(url);
    }

    info!(
        api_base_url = %config.api_base_url,
        trades_limit = config.trades_limit,
        timeout_secs = config.request_timeout_secs,
        "Buda-Bot starting"
    );

    // ── 3. Run the interactive session ───────────────────────────────────
    let client = BudaClient::new(&config)?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let session = Session::new(client, stdin, std::io::stdout(), config.display_width);

    session.run().await.context("session terminated")?;

    info!("Buda-Bot shut down");
    Ok(())
}
