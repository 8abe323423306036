// =============================================================================
// Runtime Configuration — exchange endpoint, fetch limits and display width
// =============================================================================
//
// Loaded once at startup from an optional JSON file.  All fields carry
// `#[serde(default)]` so a partial (or empty) file still loads, and a missing
// file simply means "use the defaults".
// =============================================================================

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::render::DEFAULT_WIDTH;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "buda_bot.json";

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_api_base_url() -> String {
    "https://www.buda.com/api/v2".to_string()
}

fn default_trades_limit() -> u32 {
    100
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_display_width() -> usize {
    DEFAULT_WIDTH
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level configuration for the Buda-Bot client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Base URL of the Buda public API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Maximum number of trades requested per market.
    #[serde(default = "default_trades_limit")]
    pub trades_limit: u32,

    /// Upper bound on a single HTTP request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Inner width of the rendered boxes.
    #[serde(default = "default_display_width")]
    pub display_width: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            trades_limit: default_trades_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            display_width: default_display_width(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// Returns an error if the file is missing or malformed so the caller can
    /// fall back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;

        info!(
            path = %path.display(),
            api_base_url = %config.api_base_url,
            trades_limit = config.trades_limit,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Point the client at a different API root (e.g. from `BUDA_API_URL`).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.api_base_url, "https://www.buda.com/api/v2");
        assert_eq!(cfg.trades_limit, 100);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.display_width, 60);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.trades_limit, 100);
        assert_eq!(cfg.request_timeout_secs, 10);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "trades_limit": 50, "display_width": 72 }"#;
        let cfg: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.trades_limit, 50);
        assert_eq!(cfg.display_width, 72);
        assert_eq!(cfg.api_base_url, "https://www.buda.com/api/v2");
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let cfg = RuntimeConfig::default().with_api_base_url("http://localhost:8080/api/v2/");
        assert_eq!(cfg.api_base_url, "http://localhost:8080/api/v2");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(RuntimeConfig::load("definitely/not/here/buda_bot.json").is_err());
    }
}
