//! Priority Watchlist Bounded Context
//!
//! Ranks the open option book by how urgently each position needs attention.
//! Scoring is a pure function of the positions, a price lookup and a
//! [`WatchlistConfig`]; nothing is cached between passes.

mod config;
mod priority;
mod scorer;
mod summary;

pub use config::WatchlistConfig;
pub use priority::{PriceSource, PriorityOption, PriorityReason};
pub use scorer::{distance_to_strike, score_positions};
pub use summary::WatchlistSummary;
