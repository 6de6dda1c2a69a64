//! Option Position Domain Services

mod roll_aggregator;

pub use roll_aggregator::{ContractSize, RollSummary, aggregate_rolls};
