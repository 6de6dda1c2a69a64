//! Price Lookup Port (Driven Port)
//!
//! Source of the last underlying price used by watchlist scoring. Live market
//! data is out of scope; any closure or the static price table will do.

use rust_decimal::Decimal;

/// Last known price for an underlying ticker.
pub trait PriceLookup: Send + Sync {
    /// Price of `underlying`, or `None` when no quote is known.
    fn current_price(&self, underlying: &str) -> Option<Decimal>;
}

impl<F> PriceLookup for F
where
    F: Fn(&str) -> Option<Decimal> + Send + Sync,
{
    fn current_price(&self, underlying: &str) -> Option<Decimal> {
        self(underlying)
    }
}
