// =============================================================================
// Aggregates — highest / lowest transaction and mean amount
// =============================================================================
//
// Transactions are ranked by traded amount, not by unit price.  On ties the
// first entry in input order wins.

use crate::types::TradeEntry;

/// Entry with the greatest amount, or `None` when `entries` is empty.
pub fn max_by_amount(entries: &[TradeEntry]) -> Option<&TradeEntry> {
    entries.iter().fold(None, |best, e| match best {
        Some(b) if b.amount >= e.amount => Some(b),
        _ => Some(e),
    })
}

/// Entry with the least amount, or `None` when `entries` is empty.
pub fn min_by_amount(entries: &[TradeEntry]) -> Option<&TradeEntry> {
    entries.iter().fold(None, |best, e| match best {
        Some(b) if b.amount <= e.amount => Some(b),
        _ => Some(e),
    })
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn trade(timestamp: i64, amount: f64, price: f64) -> TradeEntry {
        TradeEntry::new(timestamp, amount, price, Direction::Buy)
    }

    #[test]
    fn max_ranks_by_amount_not_price() {
        let entries = vec![trade(1, 5.0, 1.0), trade(2, 2.0, 900.0)];
        assert_eq!(max_by_amount(&entries).unwrap().timestamp, 1);
        assert_eq!(min_by_amount(&entries).unwrap().timestamp, 2);
    }

    #[test]
    fn ties_resolve_to_first_occurrence() {
        let entries = vec![
            trade(1, 1.0, 10.0),
            trade(2, 7.0, 20.0),
            trade(3, 7.0, 30.0),
            trade(4, 1.0, 40.0),
        ];
        assert_eq!(max_by_amount(&entries).unwrap().timestamp, 2);
        assert_eq!(min_by_amount(&entries).unwrap().timestamp, 1);
    }

    #[test]
    fn empty_input_has_no_extremes() {
        assert!(max_by_amount(&[]).is_none());
        assert!(min_by_amount(&[]).is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let entries = vec![trade(9, 3.0, 1.0), trade(8, 3.0, 2.0), trade(7, 0.5, 3.0)];
        assert_eq!(max_by_amount(&entries), max_by_amount(&entries));
        assert_eq!(max_by_amount(&entries).unwrap().timestamp, 9);
        assert_eq!(min_by_amount(&entries).unwrap().timestamp, 7);
    }

    #[test]
    fn mean_of_single_value_is_that_value() {
        assert_eq!(mean(&[0.25]), Some(0.25));
    }

    #[test]
    fn mean_of_values() {
        let m = mean(&[1.0, 2.0, 6.0]).unwrap();
        assert!((m - 3.0).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }
}
