//! Static price table.
//!
//! Fixed `underlying -> price` map standing in for a market data feed.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::PriceLookup;

/// Last prices keyed by upper-cased ticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, Decimal>", into = "HashMap<String, Decimal>")]
pub struct StaticPriceTable {
    prices: HashMap<String, Decimal>,
}

impl StaticPriceTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price of `underlying`.
    pub fn insert(&mut self, underlying: &str, price: Decimal) {
        self.prices.insert(normalize(underlying), price);
    }

    /// Builder form of [`StaticPriceTable::insert`].
    #[must_use]
    pub fn with_price(mut self, underlying: &str, price: Decimal) -> Self {
        self.insert(underlying, price);
        self
    }

    /// Parse a JSON object of `{"TICKER": price}`.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an object of numbers or numeric strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when no prices are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

fn normalize(underlying: &str) -> String {
    underlying.trim().to_uppercase()
}

impl PriceLookup for StaticPriceTable {
    fn current_price(&self, underlying: &str) -> Option<Decimal> {
        self.prices.get(&normalize(underlying)).copied()
    }
}

impl From<HashMap<String, Decimal>> for StaticPriceTable {
    fn from(prices: HashMap<String, Decimal>) -> Self {
        prices.into_iter().collect()
    }
}

impl From<StaticPriceTable> for HashMap<String, Decimal> {
    fn from(table: StaticPriceTable) -> Self {
        table.prices
    }
}

impl<S: AsRef<str>> FromIterator<(S, Decimal)> for StaticPriceTable {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter
                .into_iter()
                .map(|(symbol, price)| (normalize(symbol.as_ref()), price))
                .collect(),
        }
    }
}
