// =============================================================================
// Session — interactive Menu → Selector → Report loop
// =============================================================================
//
// Markets are fetched once.  Each "show" cycle fetches trades for every market
// in order (unless only descriptor info was requested), filters them to the
// chosen window and renders one report block per market.  Any upstream failure
// ends the session; blocks already rendered stay on screen.
// =============================================================================

use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

use crate::buda::{FetchError, MarketSource};
use crate::render::BoxRenderer;
use crate::report::{build_report, Statistic};
use crate::trades::{cutoff, filter_trades};
use crate::types::{MarketDescriptor, RangeSelector, SelectionMode};

/// Why a session ended other than by the user quitting.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("connection failed: {0}")]
    Connection(#[from] FetchError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Current wall-clock time in milliseconds since the UNIX epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One interactive run against a market source.
pub struct Session<S, R, W: Write> {
    source: S,
    input: R,
    renderer: BoxRenderer<W>,
    clock: fn() -> i64,
}

impl<S, R, W> Session<S, R, W>
where
    S: MarketSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(source: S, input: R, output: W, width: usize) -> Self {
        Self {
            source,
            input,
            renderer: BoxRenderer::new(output, width),
            clock: now_ms,
        }
    }

    /// Replace the wall clock used as the reference instant for trade windows.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Run until the user quits, input ends, or the exchange fails.
    pub async fn run(mut self) -> Result<(), SessionError> {
        self.renderer.welcome()?;

        let markets = match self.source.markets().await {
            Ok(markets) => markets,
            Err(e) => return self.abort(e),
        };
        info!(count = markets.len(), "markets loaded");

        loop {
            self.renderer.menu()?;
            match self.read_choice(&["s", "q"]).await?.as_deref() {
                Some("s") => {}
                _ => break,
            }

            let Some((mode, range)) = self.select().await? else {
                break;
            };

            if let Err(e) = self.show(&markets, mode, range).await {
                return match e {
                    SessionError::Connection(e) => self.abort(e),
                    other => Err(other),
                };
            }
        }

        self.renderer.farewell()?;
        self.renderer.flush()?;
        Ok(())
    }

    /// Prompt for a mode and, when trades are involved, a range.
    /// `None` means input ended.
    async fn select(&mut self) -> Result<Option<(SelectionMode, RangeSelector)>, SessionError> {
        self.renderer.selector()?;
        let Some(key) = self.read_choice(&["i", "h", "l", "m"]).await? else {
            return Ok(None);
        };
        let Some(mode) = SelectionMode::from_key(&key) else {
            return Ok(None);
        };

        if !mode.needs_trades() {
            return Ok(Some((mode, RangeSelector::default())));
        }

        self.renderer.range_selector()?;
        let range = self
            .read_choice(&["d", "w", "m", "a"])
            .await?
            .and_then(|key| RangeSelector::from_key(&key));

        Ok(range.map(|range| (mode, range)))
    }

    /// Render one block per market for the chosen mode and range.
    async fn show(
        &mut self,
        markets: &[MarketDescriptor],
        mode: SelectionMode,
        range: RangeSelector,
    ) -> Result<(), SessionError> {
        self.renderer.section_header(mode)?;
        if mode.needs_trades() {
            self.renderer.range_notice(range)?;
        }
        info!(%mode, %range, markets = markets.len(), "showing markets");

        for market in markets {
            let statistic = if mode.needs_trades() {
                let now = (self.clock)();
                let trades = self.source.trades(&market.id, now).await?;
                let filtered = filter_trades(&trades, cutoff(range, now));
                debug!(
                    market = %market.id,
                    fetched = trades.len(),
                    in_range = filtered.len(),
                    "trades filtered"
                );
                Statistic::compute(mode, &filtered)
            } else {
                Statistic::Info
            };

            let report = build_report(market, &statistic);
            debug!(market = %report.market_id, lines = report.lines.len(), "report built");
            self.renderer.report(&report)?;
        }

        self.renderer.flush()?;
        Ok(())
    }

    /// Prompt until one of `valid` is entered.  `None` on end of input.
    async fn read_choice(&mut self, valid: &[&str]) -> Result<Option<String>, SessionError> {
        loop {
            self.renderer.prompt()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Ok(None);
            }

            let choice = line.trim();
            if valid.contains(&choice) {
                return Ok(Some(choice.to_string()));
            }
            debug!(input = %choice, "invalid menu input");
            self.renderer.invalid_input()?;
        }
    }

    fn abort(mut self, e: FetchError) -> Result<(), SessionError> {
        error!(error = %e, "upstream query failed, quitting");
        self.renderer.connection_error()?;
        self.renderer.farewell()?;
        self.renderer.flush()?;
        Err(SessionError::Connection(e))
    }
}
