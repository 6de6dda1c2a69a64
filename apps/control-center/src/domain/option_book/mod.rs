//! Option Book Bounded Context
//!
//! Read-only views over the enriched book: expiry labels, expiry grouping and
//! book-wide totals for the dashboard.

mod book;
mod expiry;

pub use crate::domain::option_position::days_to_expiry;
pub use book::{BookTotals, ExpiryGroup, group_by_expiry};
pub use expiry::{ExpiryBucket, dte_label};
