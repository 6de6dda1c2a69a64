//! Roll history: the append-only log of roll events for one position.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Symbol, Timestamp};

/// One side of a roll: the contract that was closed or the one that was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolledLeg {
    /// Contract symbol.
    pub symbol: Symbol,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiry: NaiveDate,
}

impl RolledLeg {
    /// Create a new leg description.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, strike: Decimal, expiry: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            strike,
            expiry,
        }
    }
}

/// A single roll event: closes one option leg and opens another.
///
/// Produced once by the roll detector and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollHistoryEntry {
    roll_date: Timestamp,
    from_symbol: Symbol,
    to_symbol: Symbol,
    from_strike: Decimal,
    to_strike: Decimal,
    from_expiry: NaiveDate,
    to_expiry: NaiveDate,
    /// Net premium received (+) or paid (-) for the roll.
    credit: Money,
    /// P/L recognized by closing the prior leg.
    #[serde(rename = "realizedPL")]
    realized_pl: Money,
}

impl RollHistoryEntry {
    /// Record a roll from `from` into `to`.
    #[must_use]
    pub fn new(
        roll_date: Timestamp,
        from: RolledLeg,
        to: RolledLeg,
        credit: Money,
        realized_pl: Money,
    ) -> Self {
        Self {
            roll_date,
            from_symbol: from.symbol,
            to_symbol: to.symbol,
            from_strike: from.strike,
            to_strike: to.strike,
            from_expiry: from.expiry,
            to_expiry: to.expiry,
            credit,
            realized_pl,
        }
    }

    /// When the roll happened.
    #[must_use]
    pub const fn roll_date(&self) -> Timestamp {
        self.roll_date
    }

    /// The leg that was closed.
    #[must_use]
    pub fn from_leg(&self) -> RolledLeg {
        RolledLeg::new(self.from_symbol.clone(), self.from_strike, self.from_expiry)
    }

    /// The leg that was opened.
    #[must_use]
    pub fn to_leg(&self) -> RolledLeg {
        RolledLeg::new(self.to_symbol.clone(), self.to_strike, self.to_expiry)
    }

    /// Net premium of the roll; positive when a credit was received.
    #[must_use]
    pub const fn credit(&self) -> Money {
        self.credit
    }

    /// P/L realized by closing the prior leg.
    #[must_use]
    pub const fn realized_pl(&self) -> Money {
        self.realized_pl
    }
}

/// Chronological (oldest first) roll log of one position.
///
/// Ordering is a precondition supplied by the roll detector; nothing here
/// re-sorts or rejects out-of-order entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollHistory(Vec<RollHistoryEntry>);

impl RollHistory {
    /// Empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a newly detected roll.
    pub fn push(&mut self, entry: RollHistoryEntry) {
        self.0.push(entry);
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[RollHistoryEntry] {
        &self.0
    }

    /// Iterate entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, RollHistoryEntry> {
        self.0.iter()
    }

    /// Number of rolls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the position was never rolled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recent roll.
    #[must_use]
    pub fn last(&self) -> Option<&RollHistoryEntry> {
        self.0.last()
    }

    /// Whether roll dates never decrease.
    ///
    /// Offered for callers that want to check the ordering precondition themselves.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].roll_date <= pair[1].roll_date)
    }
}

impl From<Vec<RollHistoryEntry>> for RollHistory {
    fn from(entries: Vec<RollHistoryEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<RollHistoryEntry> for RollHistory {
    fn from_iter<I: IntoIterator<Item = RollHistoryEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RollHistory {
    type Item = &'a RollHistoryEntry;
    type IntoIter = std::slice::Iter<'a, RollHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
