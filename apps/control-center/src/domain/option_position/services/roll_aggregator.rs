//! Roll aggregation and break-even pricing.
//!
//! Folds a position's roll history into summary statistics and the underlying
//! price at which the current leg, closed at intrinsic value, gives back exactly
//! the cushion built up by earlier rolls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::option_position::errors::OptionPositionError;
use crate::domain::option_position::value_objects::{OptionRight, RollHistory};
use crate::domain::shared::Money;

/// Risk-bearing size of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractSize {
    /// Contract multiplier (typically 100 for equity options).
    pub multiplier: u32,
    /// Signed contract count; negative for short positions.
    pub quantity: i32,
}

impl ContractSize {
    /// Create a contract size.
    #[must_use]
    pub const fn new(multiplier: u32, quantity: i32) -> Self {
        Self {
            multiplier,
            quantity,
        }
    }

    /// Underlying units controlled: `multiplier × |quantity|`.
    #[must_use]
    pub fn units(&self) -> Decimal {
        Decimal::from(self.multiplier) * Decimal::from(self.quantity.unsigned_abs())
    }
}

/// Derived roll figures for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollSummary {
    /// Whether the position was rolled at least once.
    pub is_rolled: bool,
    /// Number of rolls, always equal to the history length.
    pub roll_count: usize,
    /// Sum of all roll credits.
    pub total_roll_credits: Money,
    /// Sum of all realized P/L from closed legs.
    #[serde(rename = "totalRealizedPL")]
    pub total_realized_pl: Money,
    /// Underlying price where the rolled position breaks even.
    pub break_even_price: Decimal,
}

impl RollSummary {
    /// Credit available to absorb a loss on the current leg.
    #[must_use]
    pub fn net_cushion(&self) -> Money {
        self.total_roll_credits + self.total_realized_pl
    }
}

/// Aggregate `history` (oldest first) for the current leg.
///
/// `break_even_price` is `strike - cushion / units` for puts and
/// `strike + cushion / units` for calls. An unrolled position reports its
/// strike, i.e. no cushion.
///
/// # Errors
///
/// Returns [`OptionPositionError::InvalidPosition`] when `multiplier × |quantity|`
/// is zero.
pub fn aggregate_rolls(
    position_id: &str,
    history: &RollHistory,
    current_strike: Decimal,
    right: OptionRight,
    size: ContractSize,
) -> Result<RollSummary, OptionPositionError> {
    let units = size.units();
    if units.is_zero() {
        return Err(OptionPositionError::invalid_position(
            position_id,
            format!(
                "zero risk-bearing size (multiplier {} x quantity {})",
                size.multiplier, size.quantity
            ),
        ));
    }

    let roll_count = history.len();
    let total_roll_credits: Money = history.iter().map(|entry| entry.credit()).sum();
    let total_realized_pl: Money = history.iter().map(|entry| entry.realized_pl()).sum();

    let break_even_price = if roll_count == 0 {
        current_strike
    } else {
        let cushion_per_unit = (total_roll_credits + total_realized_pl).amount() / units;
        match right {
            OptionRight::Put => current_strike - cushion_per_unit,
            OptionRight::Call => current_strike + cushion_per_unit,
        }
    };

    Ok(RollSummary {
        is_rolled: roll_count > 0,
        roll_count,
        total_roll_credits,
        total_realized_pl,
        break_even_price,
    })
}
