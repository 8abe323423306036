// =============================================================================
// Market Report — labeled display lines for one market
// =============================================================================
//
// The builder is pure: it turns a market descriptor plus a computed statistic
// into an ordered list of (label, value) pairs.  Padding and borders belong to
// the renderer.
// =============================================================================

use chrono::DateTime;

use crate::trades::{self, FilteredSet};
use crate::types::{MarketDescriptor, SelectionMode, TradeEntry};

/// Quote currency that gets an extra equivalent-value line.
const CLP: &str = "CLP";

/// Marker shown in place of a mean when a direction has no trades.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown instead of a transaction when nothing falls inside the window.
pub const NO_TRADES_IN_RANGE: &str = "No trades in selected range";

/// One `Label: value` row of a report block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A market's identifier plus the lines to display for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketReport {
    pub market_id: String,
    pub lines: Vec<ReportLine>,
}

#[cfg(test)]
impl MarketReport {
    /// Look up the value of the first line carrying `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

/// Result of aggregating a market's trades for a given selection mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Statistic {
    /// Descriptor fields only; no trades involved.
    Info,
    Highest(Option<TradeEntry>),
    Lowest(Option<TradeEntry>),
    Average {
        buy: Option<f64>,
        sell: Option<f64>,
    },
}

impl Statistic {
    /// Run the aggregation `mode` asks for over an already-filtered set.
    pub fn compute(mode: SelectionMode, filtered: &FilteredSet) -> Self {
        match mode {
            SelectionMode::Info => Self::Info,
            SelectionMode::Highest => {
                Self::Highest(trades::max_by_amount(&filtered.entries).copied())
            }
            SelectionMode::Lowest => {
                Self::Lowest(trades::min_by_amount(&filtered.entries).copied())
            }
            SelectionMode::Average => Self::Average {
                buy: trades::mean(&filtered.buy_amounts),
                sell: trades::mean(&filtered.sell_amounts),
            },
        }
    }
}

/// Build the display lines for `market` from `statistic`.
pub fn build_report(market: &MarketDescriptor, statistic: &Statistic) -> MarketReport {
    let mut lines = vec![
        ReportLine::new("ID", &market.id),
        ReportLine::new("Name", &market.name),
    ];

    match statistic {
        Statistic::Info => {
            lines.push(ReportLine::new("Base Currency", &market.base_currency));
            lines.push(ReportLine::new("Quote Currency", &market.quote_currency));
            lines.push(ReportLine::new(
                "Minimum Order Amount",
                format!(
                    "{} ({})",
                    market.minimum_order_amount.amount(),
                    market.minimum_order_amount.currency()
                ),
            ));
        }
        Statistic::Highest(entry) => {
            push_transaction(&mut lines, market, "Highest Transaction", entry.as_ref());
        }
        Statistic::Lowest(entry) => {
            push_transaction(&mut lines, market, "Lowest Transaction", entry.as_ref());
        }
        Statistic::Average { buy, sell } => {
            lines.push(ReportLine::new(
                "Average Buy Value",
                format_mean(*buy, &market.base_currency),
            ));
            lines.push(ReportLine::new(
                "Average Sell Value",
                format_mean(*sell, &market.base_currency),
            ));
        }
    }

    MarketReport {
        market_id: market.id.clone(),
        lines,
    }
}

fn push_transaction(
    lines: &mut Vec<ReportLine>,
    market: &MarketDescriptor,
    label: &str,
    entry: Option<&TradeEntry>,
) {
    let Some(entry) = entry else {
        lines.push(ReportLine::new(label, NO_TRADES_IN_RANGE));
        return;
    };

    lines.push(ReportLine::new(
        label,
        format!("{} ({})", entry.amount, market.base_currency),
    ));
    if market.quote_currency == CLP {
        lines.push(ReportLine::new(
            "--> Equivalent in CLP",
            format!("{:.2} ({CLP})", entry.amount * entry.price),
        ));
    }
    lines.push(ReportLine::new("Transaction Direction", entry.direction.to_string()));
    lines.push(ReportLine::new(
        "Transaction Price",
        format!("{} ({})", entry.price, market.quote_currency),
    ));
    lines.push(ReportLine::new(
        "Transaction Date/Time",
        format_trade_time(entry.timestamp),
    ));
}

fn format_mean(mean: Option<f64>, currency: &str) -> String {
    match mean {
        Some(m) => format!("{m:.8} ({currency})"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Render a millisecond timestamp as `DD/MM/YYYY HH:MM:SS` in UTC, dropping
/// the sub-second part.
pub fn format_trade_time(timestamp_ms: i64) -> String {
    DateTime::from_timestamp(timestamp_ms.div_euclid(1000), 0)
        .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
