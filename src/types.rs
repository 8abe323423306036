// =============================================================================
// Shared types used across Buda-Bot
// =============================================================================

use serde::{Deserialize, Serialize};

/// Minimum order size for a market, as `[amount, currency]` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumOrderAmount(pub String, pub String);

impl MinimumOrderAmount {
    pub fn amount(&self) -> &str {
        &self.0
    }

    pub fn currency(&self) -> &str {
        &self.1
    }
}

/// A tradable currency pair as reported by the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDescriptor {
    pub id: String,
    pub name: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub minimum_order_amount: MinimumOrderAmount,
}

/// Whether the taker bought or sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Parse the lowercase wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// One executed trade, with numeric fields already parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeEntry {
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
    pub amount: f64,
    pub price: f64,
    pub direction: Direction,
}

impl TradeEntry {
    pub fn new(timestamp: i64, amount: f64, price: f64, direction: Direction) -> Self {
        Self {
            timestamp,
            amount,
            price,
            direction,
        }
    }
}

/// What the user asked to see for every market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Info,
    Highest,
    Lowest,
    Average,
}

impl SelectionMode {
    /// Map a selector key (`i`, `h`, `l`, `m`) to a mode.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "i" => Some(Self::Info),
            "h" => Some(Self::Highest),
            "l" => Some(Self::Lowest),
            "m" => Some(Self::Average),
            _ => None,
        }
    }

    /// Info is answered from market descriptors alone.
    pub fn needs_trades(self) -> bool {
        !matches!(self, Self::Info)
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Highest => write!(f, "Highest"),
            Self::Lowest => write!(f, "Lowest"),
            Self::Average => write!(f, "Average"),
        }
    }
}

/// How far back trades are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelector {
    Day,
    Week,
    Month,
    All,
}

impl RangeSelector {
    /// Map a range key (`d`, `w`, `m`, `a`) to a selector.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "d" => Some(Self::Day),
            "w" => Some(Self::Week),
            "m" => Some(Self::Month),
            "a" => Some(Self::All),
            _ => None,
        }
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::Day
    }
}

impl std::fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::Week => write!(f, "Week"),
            Self::Month => write!(f, "Month"),
            Self::All => write!(f, "All"),
        }
    }
}
