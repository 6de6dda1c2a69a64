//! Option Position Bounded Context
//!
//! This module handles option position tracking for the control center:
//! - Raw position rows and their roll history
//! - Roll aggregation (roll count, roll credits, realized P/L, break-even)
//! - The enriched, read-only position handed to scoring and presentation

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::OptionPositionError;
pub use services::{ContractSize, RollSummary, aggregate_rolls};
pub use value_objects::{
    Greeks, OptionPosition, OptionPositionRecord, OptionRight, RollHistory, RollHistoryEntry,
    RolledLeg, days_to_expiry,
};
