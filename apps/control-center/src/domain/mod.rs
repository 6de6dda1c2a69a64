//! Domain Layer
//!
//! Pure portfolio logic with no I/O. Everything here is deterministic given its
//! inputs and safe to call from any thread.
//!
//! # Bounded Contexts
//!
//! - [`option_position`]: Position rows, roll history and roll aggregation
//! - [`watchlist`]: Priority scoring of the open book
//! - [`option_book`]: Expiry grouping and book totals
//! - [`shared`]: Money, symbols, timestamps

pub mod option_book;
pub mod option_position;
pub mod shared;
pub mod watchlist;
