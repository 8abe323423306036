// =============================================================================
// Buda REST API Client — public market endpoints
// =============================================================================
//
// Only unauthenticated endpoints are used.  Every request is bounded by the
// configured timeout.  Numeric fields arrive as strings and are parsed here,
// once, so the rest of the program only sees typed values.
// =============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::{FetchError, MarketSource};
use crate::runtime_config::RuntimeConfig;
use crate::types::{Direction, MarketDescriptor, TradeEntry};

#[derive(Debug, Deserialize)]
struct MarketsEnvelope {
    markets: Vec<MarketDescriptor>,
}

#[derive(Debug, Deserialize)]
struct TradesEnvelope {
    trades: TradesPage,
}

#[derive(Debug, Deserialize)]
struct TradesPage {
    entries: Vec<serde_json::Value>,
}

/// Client for the Buda public REST API.
#[derive(Clone)]
pub struct BudaClient {
    base_url: String,
    trades_limit: u32,
    client: reqwest::Client,
}

impl BudaClient {
    /// Build a client from the runtime configuration.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("failed to build HTTP client")?;

        debug!(base_url = %config.api_base_url, "BudaClient initialised");

        Ok(Self {
            base_url: config.api_base_url.clone(),
            trades_limit: config.trades_limit,
            client,
        })
    }

    /// GET /markets.
    #[instrument(skip(self), name = "buda::get_markets")]
    pub async fn get_markets(&self) -> Result<Vec<MarketDescriptor>, FetchError> {
        let body = self.get_json("/markets".to_string(), &[]).await?;
        let markets = parse_markets(body)?;
        debug!(count = markets.len(), "markets fetched");
        Ok(markets)
    }

    /// GET /markets/{id}/trades?timestamp={timestamp}&limit={limit}.
    #[instrument(skip(self), name = "buda::get_trades")]
    pub async fn get_trades(
        &self,
        market_id: &str,
        timestamp: i64,
        limit: u32,
    ) -> Result<Vec<TradeEntry>, FetchError> {
        let endpoint = format!("/markets/{market_id}/trades");
        let query = [
            ("timestamp", timestamp.to_string()),
            ("limit", limit.to_string()),
        ];
        let body = self.get_json(endpoint, &query).await?;
        let trades = parse_trades(body)?;
        debug!(market_id, count = trades.len(), "trades fetched");
        Ok(trades)
    }

    async fn get_json(
        &self,
        endpoint: String,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let resp = match self.client.get(&url).query(query).send().await {
            Ok(resp) => resp,
            Err(source) => return Err(FetchError::Request { endpoint, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint, status = %status, "non-success response");
            return Err(FetchError::Status { endpoint, status });
        }

        resp.json().await.map_err(|e| FetchError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

impl MarketSource for BudaClient {
    async fn markets(&self) -> Result<Vec<MarketDescriptor>, FetchError> {
        self.get_markets().await
    }

    async fn trades(&self, market_id: &str, timestamp: i64) -> Result<Vec<TradeEntry>, FetchError> {
        self.get_trades(market_id, timestamp, self.trades_limit).await
    }
}

impl std::fmt::Debug for BudaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudaClient")
            .field("base_url", &self.base_url)
            .field("trades_limit", &self.trades_limit)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Wire decoding
// -----------------------------------------------------------------------------

fn parse_markets(body: serde_json::Value) -> Result<Vec<MarketDescriptor>, FetchError> {
    serde_json::from_value::<MarketsEnvelope>(body)
        .map(|env| env.markets)
        .map_err(|e| FetchError::Decode {
            endpoint: "/markets".to_string(),
            message: e.to_string(),
        })
}

/// Decode a trades page, dropping (and logging) entries that fail to parse.
fn parse_trades(body: serde_json::Value) -> Result<Vec<TradeEntry>, FetchError> {
    let page = serde_json::from_value::<TradesEnvelope>(body)
        .map_err(|e| FetchError::Decode {
            endpoint: "/trades".to_string(),
            message: e.to_string(),
        })?
        .trades;

    let mut trades = Vec::with_capacity(page.entries.len());
    for raw in &page.entries {
        match parse_entry(raw) {
            Ok(entry) => trades.push(entry),
            Err(e) => warn!(entry = %raw, error = %e, "skipping malformed trade entry"),
        }
    }
    Ok(trades)
}

/// Parse one `[timestamp, amount, price, direction, ...]` tuple.
fn parse_entry(raw: &serde_json::Value) -> Result<TradeEntry> {
    let arr = raw.as_array().context("trade entry is not an array")?;
    if arr.len() < 4 {
        anyhow::bail!("trade entry has {} fields, expected at least 4", arr.len());
    }

    let timestamp = parse_str_i64(&arr[0]).context("bad timestamp")?;
    let amount = parse_str_f64(&arr[1]).context("bad amount")?;
    let price = parse_str_f64(&arr[2]).context("bad price")?;
    let direction = arr[3]
        .as_str()
        .and_then(Direction::parse)
        .with_context(|| format!("unknown direction {}", arr[3]))?;

    Ok(TradeEntry::new(timestamp, amount, price, direction))
}

/// Parse a JSON value that may be either a string or a number into `f64`.
fn parse_str_f64(val: &serde_json::Value) -> Result<f64> {
    let n = if let Some(s) = val.as_str() {
        s.parse::<f64>()
            .with_context(|| format!("failed to parse '{s}' as f64"))?
    } else if let Some(n) = val.as_f64() {
        n
    } else {
        anyhow::bail!("expected string or number, got: {val}")
    };
    if !n.is_finite() {
        anyhow::bail!("non-finite value {val}");
    }
    Ok(n)
}

/// Parse a JSON value that may be either a string or a number into `i64`.
fn parse_str_i64(val: &serde_json::Value) -> Result<i64> {
    if let Some(s) = val.as_str() {
        s.parse::<i64>()
            .with_context(|| format!("failed to parse '{s}' as i64"))
    } else if let Some(n) = val.as_i64() {
        Ok(n)
    } else {
        anyhow::bail!("expected string or integer, got: {val}")
    }
}
