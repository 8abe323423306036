// =============================================================================
// Time Window — range selector to cutoff instant
// =============================================================================

use crate::types::RangeSelector;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;

/// Earliest timestamp (inclusive, milliseconds) that falls inside `range`
/// relative to `now`.
pub fn cutoff(range: RangeSelector, now: i64) -> i64 {
    match range {
        RangeSelector::Day => now - DAY_MS,
        RangeSelector::Week => now - WEEK_MS,
        RangeSelector::Month => now - MONTH_MS,
        RangeSelector::All => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn cutoffs_match_window_lengths() {
        assert_eq!(cutoff(RangeSelector::Day, NOW), NOW - 86_400_000);
        assert_eq!(cutoff(RangeSelector::Week, NOW), NOW - 604_800_000);
        assert_eq!(cutoff(RangeSelector::Month, NOW), NOW - 2_592_000_000);
        assert_eq!(cutoff(RangeSelector::All, NOW), 0);
    }

    #[test]
    fn cutoff_does_not_increase_as_range_widens() {
        for now in [MONTH_MS, NOW, 2 * NOW] {
            let day = cutoff(RangeSelector::Day, now);
            let week = cutoff(RangeSelector::Week, now);
            let month = cutoff(RangeSelector::Month, now);
            let all = cutoff(RangeSelector::All, now);
            assert!(day >= week);
            assert!(week >= month);
            assert!(month >= all);
            assert_eq!(all, 0);
        }
    }
}
