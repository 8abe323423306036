// =============================================================================
// Trade Analytics Module
// =============================================================================
//
// Pure, side-effect-free pieces of the trade pipeline: resolve a cutoff from a
// range selector, keep the trades at or after it, then aggregate.  Aggregates
// return `Option<T>` so callers must handle the empty case.

pub mod aggregate;
pub mod filter;
pub mod window;

pub use aggregate::{max_by_amount, mean, min_by_amount};
pub use filter::{filter_trades, FilteredSet};
pub use window::cutoff;
