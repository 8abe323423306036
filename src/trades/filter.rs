// =============================================================================
// Trade Filter — keep trades inside the window, split amounts by direction
// =============================================================================

use crate::types::{Direction, TradeEntry};

/// Trades at or after a cutoff, plus their amounts grouped by direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSet {
    /// Matching entries in input order.
    pub entries: Vec<TradeEntry>,
    pub buy_amounts: Vec<f64>,
    pub sell_amounts: Vec<f64>,
}

impl FilteredSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Select every entry with `timestamp >= cutoff`.
///
/// No ordering is assumed on `entries`; relative order is preserved.
pub fn filter_trades(entries: &[TradeEntry], cutoff: i64) -> FilteredSet {
    let mut set = FilteredSet::default();

    for entry in entries.iter().filter(|e| e.timestamp >= cutoff) {
        match entry.direction {
            Direction::Buy => set.buy_amounts.push(entry.amount),
            Direction::Sell => set.sell_amounts.push(entry.amount),
        }
        set.entries.push(*entry);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(timestamp: i64, amount: f64, direction: Direction) -> TradeEntry {
        TradeEntry::new(timestamp, amount, 100.0, direction)
    }

    #[test]
    fn keeps_entries_at_or_after_cutoff() {
        let entries = vec![
            trade(3000, 1.0, Direction::Buy),
            trade(1000, 2.0, Direction::Sell),
            trade(2000, 3.0, Direction::Buy),
        ];
        let set = filter_trades(&entries, 2000);
        assert_eq!(set.len(), 2);
        assert!(set.entries.iter().all(|e| e.timestamp >= 2000));
        // Boundary is inclusive.
        assert_eq!(set.entries[1].timestamp, 2000);
    }

    #[test]
    fn preserves_input_order_for_unsorted_entries() {
        let entries = vec![
            trade(5, 1.0, Direction::Buy),
            trade(9, 2.0, Direction::Sell),
            trade(1, 3.0, Direction::Buy),
            trade(7, 4.0, Direction::Buy),
        ];
        let set = filter_trades(&entries, 2);
        let stamps: Vec<i64> = set.entries.iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![5, 9, 7]);
    }

    #[test]
    fn partitions_amounts_by_direction() {
        let entries = vec![
            trade(10, 1.5, Direction::Buy),
            trade(20, 2.5, Direction::Sell),
            trade(30, 0.5, Direction::Buy),
        ];
        let set = filter_trades(&entries, 0);
        assert_eq!(set.buy_amounts, vec![1.5, 0.5]);
        assert_eq!(set.sell_amounts, vec![2.5]);
        assert_eq!(set.buy_amounts.len() + set.sell_amounts.len(), set.len());
    }

    #[test]
    fn everything_below_cutoff_yields_empty_set() {
        let entries = vec![trade(10, 1.0, Direction::Buy), trade(20, 1.0, Direction::Sell)];
        let set = filter_trades(&entries, 1_000);
        assert!(set.entries.is_empty());
        assert!(set.buy_amounts.is_empty());
        assert!(set.sell_amounts.is_empty());
    }

    #[test]
    fn refiltering_is_stable() {
        let entries = vec![
            trade(100, 1.0, Direction::Buy),
            trade(50, 2.0, Direction::Sell),
            trade(150, 3.0, Direction::Sell),
        ];
        let once = filter_trades(&entries, 75);
        let twice = filter_trades(&once.entries, 75);
        assert_eq!(once, twice);
    }
}
