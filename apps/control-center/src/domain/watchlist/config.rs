//! Scoring constants for the priority watchlist.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Thresholds, bases and weights of the four scoring rules.
///
/// Rules are evaluated in order (ITM, high delta, near strike, expiring soon);
/// the first match decides the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistConfig {
    /// Base score of an in-the-money position.
    pub itm_base: Decimal,
    /// Points per percent in the money.
    pub itm_distance_weight: Decimal,

    /// `|delta|` must exceed this for the high-delta rule.
    pub high_delta_threshold: Decimal,
    /// Base score of a high-delta position.
    pub high_delta_base: Decimal,
    /// Points per unit of `|delta|`.
    pub high_delta_weight: Decimal,

    /// Distance (percent) under which a position counts as near its strike.
    pub near_strike_pct: Decimal,
    /// Base score of a near-strike position.
    pub near_strike_base: Decimal,
    /// Points per percent of remaining room inside the near-strike band.
    pub near_strike_weight: Decimal,

    /// Days to expiry at or under which the expiring rule applies.
    pub expiring_dte: i64,
    /// `|delta|` must exceed this for the expiring rule.
    pub expiring_min_delta: Decimal,
    /// Base score of an expiring position.
    pub expiring_base: Decimal,
    /// Points per day left inside the expiring window.
    pub expiring_weight: Decimal,

    /// Proxy price as a multiple of strike when no quote is available.
    pub fallback_price_multiplier: Decimal,
    /// Maximum entries returned.
    pub max_entries: usize,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            itm_base: dec!(100),
            itm_distance_weight: dec!(2),
            high_delta_threshold: dec!(0.35),
            high_delta_base: dec!(70),
            high_delta_weight: dec!(50),
            near_strike_pct: dec!(5),
            near_strike_base: dec!(50),
            near_strike_weight: dec!(10),
            expiring_dte: 7,
            expiring_min_delta: dec!(0.2),
            expiring_base: dec!(40),
            expiring_weight: dec!(5),
            fallback_price_multiplier: dec!(1.05),
            max_entries: 8,
        }
    }
}
