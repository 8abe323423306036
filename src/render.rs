// =============================================================================
// Box Renderer — fixed-width text blocks for the interactive UI
// =============================================================================
//
// Every line is drawn inside `|` borders `width` columns apart.  Report rows
// put the label in a 27-column gutter and the value right after it; rows that
// do not fit are emitted unpadded.
// =============================================================================

use std::io::{self, Write};

use crate::report::MarketReport;
use crate::types::{RangeSelector, SelectionMode};

/// Inner width of the box used when no configuration overrides it.
pub const DEFAULT_WIDTH: usize = 60;

/// Columns reserved for `Label:` in a report row.
const LABEL_GUTTER: usize = 27;

/// Draws banners and report blocks onto any writer.
pub struct BoxRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> BoxRenderer<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    // -------------------------------------------------------------------------
    // Primitives
    // -------------------------------------------------------------------------

    fn top(&mut self) -> io::Result<()> {
        writeln!(self.out, " {} ", "_".repeat(self.width))
    }

    fn bottom(&mut self) -> io::Result<()> {
        writeln!(self.out, "|{}|", "_".repeat(self.width))
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out, "|{}|", " ".repeat(self.width))
    }

    /// `| text` padded to the box width and closed with `|`.
    fn row(&mut self, text: &str) -> io::Result<()> {
        let line = format!("| {text}");
        let used = line.chars().count();
        if used <= self.width + 1 {
            writeln!(self.out, "{line}{}|", " ".repeat(self.width + 1 - used))
        } else {
            writeln!(self.out, "{line}")
        }
    }

    fn rows(&mut self, texts: &[&str]) -> io::Result<()> {
        for text in texts {
            self.row(text)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    /// Separator followed by one row per report line.
    pub fn report(&mut self, report: &MarketReport) -> io::Result<()> {
        self.bottom()?;
        self.blank()?;
        for line in &report.lines {
            let label = format!("{}:", line.label);
            self.row(&format!("{label:<gutter$}{}", line.value, gutter = LABEL_GUTTER))?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Banners
    // -------------------------------------------------------------------------

    pub fn welcome(&mut self) -> io::Result<()> {
        self.top()?;
        self.blank()?;
        self.row("         W E L C O M E    T O    B U D A - B O T!")
    }

    pub fn menu(&mut self) -> io::Result<()> {
        self.bottom()?;
        self.blank()?;
        self.row("-- M E N U :")?;
        self.blank()?;
        self.rows(&["* Show :   's'", "* Quit :   'q'"])?;
        self.bottom()
    }

    pub fn selector(&mut self) -> io::Result<()> {
        self.top()?;
        self.row("What do you want to show?:")?;
        self.blank()?;
        self.rows(&[
            "* Markets Info            :   'i'",
            "* Markets Trades Highest  :   'h'",
            "* Markets Trades Lowest   :   'l'",
            "* Markets Trades Average  :   'm'",
        ])?;
        self.bottom()
    }

    pub fn range_selector(&mut self) -> io::Result<()> {
        self.top()?;
        self.row("What time range do you want to use?:")?;
        self.blank()?;
        self.rows(&[
            "* Last 24 hours           :   'd'",
            "* Last 7 days             :   'w'",
            "* Last 30 days            :   'm'",
            "* All available           :   'a'",
        ])?;
        self.bottom()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "  >> ")?;
        self.out.flush()
    }

    pub fn invalid_input(&mut self) -> io::Result<()> {
        self.top()?;
        self.blank()?;
        self.row("Invalid input, please try again...")?;
        self.bottom()
    }

    /// Title shown before the per-market blocks.
    pub fn section_header(&mut self, mode: SelectionMode) -> io::Result<()> {
        let title = match mode {
            SelectionMode::Info => "General information of all markets:",
            SelectionMode::Highest => "Highest transactions of all markets:",
            SelectionMode::Lowest => "Lowest transactions of all markets:",
            SelectionMode::Average => "Mean of transactions of all markets:",
        };
        self.top()?;
        self.blank()?;
        self.row(title)
    }

    pub fn range_notice(&mut self, range: RangeSelector) -> io::Result<()> {
        let notice = match range {
            RangeSelector::Day => "Showing data from last 24 hours...",
            RangeSelector::Week => "Showing data from last 7 days...",
            RangeSelector::Month => "Showing data from last 30 days...",
            RangeSelector::All => "Showing from all available data...",
        };
        self.row(notice)
    }

    pub fn connection_error(&mut self) -> io::Result<()> {
        self.bottom()?;
        self.blank()?;
        self.row("Error: Connection failed!")?;
        self.row("       Automatically quitting...")?;
        self.bottom()
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        self.top()?;
        self.blank()?;
        self.row("Sorry to see you leave...")?;
        self.row("Thank you for using Buda-Bot. See you soon!")?;
        self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportLine;

    fn rendered(f: impl FnOnce(&mut BoxRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = BoxRenderer::new(Vec::new(), DEFAULT_WIDTH);
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn report_rows_are_padded_to_box_width() {
        let report = MarketReport {
            market_id: "BTC-CLP".into(),
            lines: vec![
                ReportLine::new("ID", "BTC-CLP"),
                ReportLine::new("Name", "btc-clp"),
            ],
        };
        let out = rendered(|r| r.report(&report));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("|{}|", "_".repeat(60)));
        assert_eq!(lines[1], format!("|{}|", " ".repeat(60)));
        assert!(lines[2].starts_with("| ID:                        BTC-CLP"));
        for line in &lines {
            assert_eq!(line.chars().count(), 62);
            assert!(line.ends_with('|'));
        }
    }

    #[test]
    fn long_rows_are_left_unpadded() {
        let report = MarketReport {
            market_id: "X".into(),
            lines: vec![ReportLine::new("Name", "x".repeat(80))],
        };
        let out = rendered(|r| r.report(&report));
        let last = out.lines().last().unwrap();
        assert!(last.ends_with('x'));
        assert!(last.chars().count() > 62);
    }

    #[test]
    fn banners_keep_fixed_width() {
        let out = rendered(|r| {
            r.welcome()?;
            r.menu()?;
            r.selector()?;
            r.range_selector()?;
            r.section_header(SelectionMode::Average)?;
            r.range_notice(RangeSelector::Week)?;
            r.connection_error()?;
            r.farewell()
        });
        assert!(out.contains("Mean of transactions of all markets:"));
        assert!(out.contains("Showing data from last 7 days..."));
        assert!(out.contains("Error: Connection failed!"));
        assert!(out.lines().all(|l| l.chars().count() == 62));
    }
}
