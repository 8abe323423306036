// =============================================================================
// Buda Exchange — public market data queries
// =============================================================================

pub mod client;

use thiserror::Error;

use crate::types::{MarketDescriptor, TradeEntry};

pub use client::BudaClient;

/// Why an upstream query produced no usable data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("GET {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The exchange answered with a non-success status.
    #[error("GET {endpoint} returned {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The body could not be decoded into the expected shape.
    #[error("failed to decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

/// Read-only source of markets and their recent trades.
pub trait MarketSource {
    /// Every market listed on the exchange.
    async fn markets(&self) -> Result<Vec<MarketDescriptor>, FetchError>;

    /// Recent trades for `market_id` as of `timestamp` (ms), newest first.
    ///
    /// Entries whose fields fail to parse are dropped, not zero-filled.
    async fn trades(&self, market_id: &str, timestamp: i64) -> Result<Vec<TradeEntry>, FetchError>;
}
