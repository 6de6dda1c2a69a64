//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use control_center::domain::option_position::{Greeks, RolledLeg};
use control_center::{
    Money, OptionPosition, OptionPositionRecord, OptionRight, RollHistory, RollHistoryEntry,
    Symbol, Timestamp,
};
use rust_decimal::Decimal;

pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Short single-contract record expiring `dte` days after [`as_of`].
pub fn record(
    id: &str,
    underlying: &str,
    right: OptionRight,
    strike: Decimal,
    delta: Option<Decimal>,
    dte: u64,
) -> OptionPositionRecord {
    OptionPositionRecord {
        id: id.to_string(),
        underlying: Symbol::new(underlying),
        symbol: Symbol::new(format!("{underlying}250221P00100000")),
        description: None,
        strike,
        put_call: right,
        exp_date: as_of().checked_add_days(Days::new(dte)).unwrap(),
        quantity: -1,
        multiplier: 100,
        capital_at_risk: Money::new(strike * Decimal::ONE_HUNDRED),
        original_premium: Money::ZERO,
        premium_collected_to_date: Money::ZERO,
        premium_remaining: Money::ZERO,
        greeks: Greeks {
            delta,
            ..Greeks::default()
        },
        market_value: Money::ZERO,
        cost_basis: Money::ZERO,
        unrealized_pl: Money::ZERO,
        roll_group_id: None,
        roll_history: RollHistory::new(),
    }
}

pub fn position(
    id: &str,
    underlying: &str,
    right: OptionRight,
    strike: Decimal,
    delta: Option<Decimal>,
    dte: u64,
) -> OptionPosition {
    OptionPosition::enrich(record(id, underlying, right, strike, delta, dte), as_of()).unwrap()
}

/// A roll with the given credit and realized P/L.
pub fn roll(credit: Decimal, realized_pl: Decimal) -> RollHistoryEntry {
    let expiry = as_of();
    RollHistoryEntry::new(
        Timestamp::parse("2025-01-03T15:00:00Z").unwrap(),
        RolledLeg::new("AAPL250103P00100000", Decimal::ONE_HUNDRED, expiry),
        RolledLeg::new("AAPL250221P00100000", Decimal::ONE_HUNDRED, expiry),
        Money::new(credit),
        Money::new(realized_pl),
    )
}
