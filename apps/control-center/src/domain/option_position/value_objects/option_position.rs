//! Option Position Value Objects
//!
//! [`OptionPositionRecord`] is the raw row delivered by the position feed.
//! [`OptionPosition`] is the same row after enrichment: days to expiry and the
//! roll-derived figures are computed once and cannot be set by callers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Greeks, OptionRight, RollHistory, days_to_expiry};
use crate::domain::option_position::errors::OptionPositionError;
use crate::domain::option_position::services::{ContractSize, RollSummary, aggregate_rolls};
use crate::domain::shared::{Money, Symbol};

const fn default_multiplier() -> u32 {
    100
}

/// A single open options contract position as read from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPositionRecord {
    /// Unique position ID.
    pub id: String,
    /// Underlying ticker.
    pub underlying: Symbol,
    /// Contract identifier.
    pub symbol: Symbol,
    /// Free-text description from the broker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Strike price.
    pub strike: Decimal,
    /// Put or call.
    pub put_call: OptionRight,
    /// Expiration date.
    pub exp_date: NaiveDate,
    /// Signed contract count; negative for short positions.
    pub quantity: i32,
    /// Contract multiplier.
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    /// Capital at risk if assigned.
    pub capital_at_risk: Money,
    /// Premium originally received when the position was opened.
    #[serde(default)]
    pub original_premium: Money,
    /// Premium captured so far.
    #[serde(default)]
    pub premium_collected_to_date: Money,
    /// Premium still left in the contract.
    #[serde(default)]
    pub premium_remaining: Money,
    /// Greeks; any of them may be missing.
    #[serde(flatten)]
    pub greeks: Greeks,
    /// Current market value.
    #[serde(default)]
    pub market_value: Money,
    /// Cost basis (negative for credit positions).
    #[serde(default)]
    pub cost_basis: Money,
    /// Unrealized P/L.
    #[serde(default, rename = "unrealizedPL")]
    pub unrealized_pl: Money,
    /// Roll group the current leg was opened by, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_group_id: Option<String>,
    /// Chronological roll log.
    #[serde(default)]
    pub roll_history: RollHistory,
}

impl OptionPositionRecord {
    /// Check the contract terms before the record is used in calculations.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty ID, invalid symbols, a non-positive strike,
    /// a zero-sized position, or negative capital at risk.
    pub fn validate(&self) -> Result<(), OptionPositionError> {
        if self.id.trim().is_empty() {
            return Err(OptionPositionError::invalid_position(
                "<empty>",
                "position id cannot be empty",
            ));
        }
        self.underlying.validate()?;
        self.symbol.validate()?;

        if self.strike <= Decimal::ZERO {
            return Err(OptionPositionError::InvalidContract {
                message: format!("strike must be positive, got {}", self.strike),
            });
        }
        if self.contract_size().units().is_zero() {
            return Err(OptionPositionError::invalid_position(
                &self.id,
                "position must have a non-zero multiplier and quantity",
            ));
        }
        if self.capital_at_risk.is_negative() {
            return Err(OptionPositionError::invalid_position(
                &self.id,
                "capital at risk cannot be negative",
            ));
        }
        Ok(())
    }

    /// Risk-bearing size of the record.
    #[must_use]
    pub const fn contract_size(&self) -> ContractSize {
        ContractSize::new(self.multiplier, self.quantity)
    }
}

/// An open option position with its derived figures.
///
/// Built only through [`OptionPosition::enrich`]; serialized flat, so the
/// dashboard sees `dte`, `rollCount`, `breakEvenPrice`, ... next to the row fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionPosition {
    #[serde(flatten)]
    record: OptionPositionRecord,
    dte: i64,
    #[serde(flatten)]
    rolls: RollSummary,
}

impl OptionPosition {
    /// Derive days to expiry and roll figures for `record` as of `as_of`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionPositionError::InvalidPosition`] if the record has a zero
    /// risk-bearing size.
    pub fn enrich(record: OptionPositionRecord, as_of: NaiveDate) -> Result<Self, OptionPositionError> {
        let rolls = aggregate_rolls(
            &record.id,
            &record.roll_history,
            record.strike,
            record.put_call,
            record.contract_size(),
        )?;
        let dte = days_to_expiry(record.exp_date, as_of);

        Ok(Self { record, dte, rolls })
    }

    /// The underlying feed row.
    #[must_use]
    pub const fn record(&self) -> &OptionPositionRecord {
        &self.record
    }

    /// Position ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Underlying ticker.
    #[must_use]
    pub const fn underlying(&self) -> &Symbol {
        &self.record.underlying
    }

    /// Contract symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.record.symbol
    }

    /// Strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.record.strike
    }

    /// Put or call.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.record.put_call
    }

    /// Expiration date.
    #[must_use]
    pub const fn exp_date(&self) -> NaiveDate {
        self.record.exp_date
    }

    /// Days to expiry at enrichment time; negative once expired.
    #[must_use]
    pub const fn dte(&self) -> i64 {
        self.dte
    }

    /// Signed contract count.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.record.quantity
    }

    /// Contract multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.record.multiplier
    }

    /// Whether the position is short.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        self.record.quantity < 0
    }

    /// Capital at risk.
    #[must_use]
    pub const fn capital_at_risk(&self) -> Money {
        self.record.capital_at_risk
    }

    /// Premium captured so far.
    #[must_use]
    pub const fn premium_collected_to_date(&self) -> Money {
        self.record.premium_collected_to_date
    }

    /// Captured premium as a percentage of the original premium, unrounded.
    #[must_use]
    pub fn premium_collected_pct(&self) -> Option<Decimal> {
        self.record
            .premium_collected_to_date
            .percent_of(self.record.original_premium)
    }

    /// Premium still in the contract.
    #[must_use]
    pub const fn premium_remaining(&self) -> Money {
        self.record.premium_remaining
    }

    /// Remaining premium as a percentage of the original premium, unrounded.
    #[must_use]
    pub fn premium_remaining_pct(&self) -> Option<Decimal> {
        self.record
            .premium_remaining
            .percent_of(self.record.original_premium)
    }

    /// Greeks as reported.
    #[must_use]
    pub const fn greeks(&self) -> &Greeks {
        &self.record.greeks
    }

    /// Delta with a missing value read as zero.
    #[must_use]
    pub fn delta(&self) -> Decimal {
        self.record.greeks.delta_or_zero()
    }

    /// Delta in underlying units: `delta × |quantity| × multiplier`.
    #[must_use]
    pub fn delta_exposure(&self) -> Decimal {
        self.delta() * self.contract_units()
    }

    /// `multiplier × |quantity|`.
    #[must_use]
    pub fn contract_units(&self) -> Decimal {
        self.record.contract_size().units()
    }

    /// Unrealized P/L.
    #[must_use]
    pub const fn unrealized_pl(&self) -> Money {
        self.record.unrealized_pl
    }

    /// Whether the position is in the money at `underlying_price`.
    #[must_use]
    pub fn is_itm(&self, underlying_price: Decimal) -> bool {
        self.record
            .put_call
            .is_in_the_money(self.record.strike, underlying_price)
    }

    /// All roll-derived figures.
    #[must_use]
    pub const fn roll_summary(&self) -> &RollSummary {
        &self.rolls
    }

    /// Whether the position was rolled.
    #[must_use]
    pub const fn is_rolled(&self) -> bool {
        self.rolls.is_rolled
    }

    /// Number of rolls.
    #[must_use]
    pub const fn roll_count(&self) -> usize {
        self.rolls.roll_count
    }

    /// Roll log, oldest first.
    #[must_use]
    pub const fn roll_history(&self) -> &RollHistory {
        &self.record.roll_history
    }

    /// Sum of roll credits.
    #[must_use]
    pub const fn total_roll_credits(&self) -> Money {
        self.rolls.total_roll_credits
    }

    /// Sum of realized P/L from rolls.
    #[must_use]
    pub const fn total_realized_pl(&self) -> Money {
        self.rolls.total_realized_pl
    }

    /// Break-even underlying price.
    #[must_use]
    pub const fn break_even_price(&self) -> Decimal {
        self.rolls.break_even_price
    }
}
