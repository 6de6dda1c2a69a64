//! Expiry grouping and book-wide totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use super::expiry::{ExpiryBucket, dte_label};
use crate::domain::option_position::OptionPosition;
use crate::domain::shared::Money;

/// Positions sharing one expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryGroup {
    /// Expiration date.
    pub exp_date: NaiveDate,
    /// Days to expiry.
    pub dte: i64,
    /// Display label for `dte`.
    pub dte_label: String,
    /// Horizon bucket.
    pub bucket: ExpiryBucket,
    /// Members, in book order.
    pub position_ids: Vec<String>,
    /// Capital at risk of the group.
    pub total_capital_at_risk: Money,
    /// Premium collected to date by the group.
    pub total_premium_collected: Money,
    /// Delta in underlying units.
    pub total_delta: Decimal,
}

impl ExpiryGroup {
    fn new(exp_date: NaiveDate, dte: i64) -> Self {
        Self {
            exp_date,
            dte,
            dte_label: dte_label(dte),
            bucket: ExpiryBucket::from_dte(dte),
            position_ids: Vec::new(),
            total_capital_at_risk: Money::ZERO,
            total_premium_collected: Money::ZERO,
            total_delta: Decimal::ZERO,
        }
    }

    fn add(&mut self, position: &OptionPosition) {
        self.position_ids.push(position.id().to_string());
        self.total_capital_at_risk += position.capital_at_risk();
        self.total_premium_collected += position.premium_collected_to_date();
        self.total_delta += position.delta_exposure();
    }
}

/// Group positions by expiration date, earliest first.
#[must_use]
pub fn group_by_expiry<'a, I>(positions: I) -> Vec<ExpiryGroup>
where
    I: IntoIterator<Item = &'a OptionPosition>,
{
    let mut groups: BTreeMap<NaiveDate, ExpiryGroup> = BTreeMap::new();
    for position in positions {
        groups
            .entry(position.exp_date())
            .or_insert_with(|| ExpiryGroup::new(position.exp_date(), position.dte()))
            .add(position);
    }
    groups.into_values().collect()
}

/// Book-wide totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTotals {
    /// Number of positions.
    pub position_count: usize,
    /// Puts in the book.
    pub put_count: usize,
    /// Calls in the book.
    pub call_count: usize,
    /// Positions with at least one roll.
    pub rolled_count: usize,
    /// Capital at risk.
    pub capital_at_risk: Money,
    /// Premium collected to date.
    pub premium_collected: Money,
    /// Unrealized P/L.
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: Money,
    /// Roll credits across all positions.
    pub roll_credits: Money,
    /// Delta in underlying units.
    pub delta_exposure: Decimal,
    /// Sum of the per-position theta as reported by the feed, unscaled.
    pub total_theta: Decimal,
}

impl BookTotals {
    /// Total `positions`.
    #[must_use]
    pub fn from_positions<'a, I>(positions: I) -> Self
    where
        I: IntoIterator<Item = &'a OptionPosition>,
    {
        positions.into_iter().fold(Self::default(), |mut acc, p| {
            acc.position_count += 1;
            if p.right().is_put() {
                acc.put_count += 1;
            } else {
                acc.call_count += 1;
            }
            if p.is_rolled() {
                acc.rolled_count += 1;
            }
            acc.capital_at_risk += p.capital_at_risk();
            acc.premium_collected += p.premium_collected_to_date();
            acc.unrealized_pl += p.unrealized_pl();
            acc.roll_credits += p.total_roll_credits();
            acc.delta_exposure += p.delta_exposure();
            acc.total_theta += p.greeks().theta_or_zero();
            acc
        })
    }

    /// Premium collected as a percentage of capital at risk.
    #[must_use]
    pub fn return_on_risk_pct(&self) -> Option<Decimal> {
        self.premium_collected.percent_of(self.capital_at_risk)
    }
}
