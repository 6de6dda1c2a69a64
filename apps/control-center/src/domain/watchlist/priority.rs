//! Watchlist entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::option_position::OptionPosition;

/// Why a position made the watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityReason {
    /// Position is in the money.
    Itm,
    /// `|delta|` above the high-delta threshold.
    HighDelta,
    /// Underlying trades close to the strike.
    NearStrike,
    /// Few days left with a meaningful delta.
    ExpiringSoon,
}

impl PriorityReason {
    /// Short badge text.
    #[must_use]
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Itm => "ITM",
            Self::HighDelta => "High Δ",
            Self::NearStrike => "Near Strike",
            Self::ExpiringSoon => "Expiring",
        }
    }
}

impl fmt::Display for PriorityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Itm => write!(f, "itm"),
            Self::HighDelta => write!(f, "high_delta"),
            Self::NearStrike => write!(f, "near_strike"),
            Self::ExpiringSoon => write!(f, "expiring_soon"),
        }
    }
}

/// Where the price used for scoring came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// A price lookup returned a quote.
    Quoted,
    /// No usable quote; strike times the fallback multiplier was used.
    Fallback,
}

/// One scored position. Recomputed on every pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityOption {
    /// The scored position.
    pub position: OptionPosition,
    /// Underlying price used for scoring.
    pub current_price: Decimal,
    /// Origin of `current_price`.
    pub price_source: PriceSource,
    /// Signed percent distance to strike; negative means in the money.
    pub distance_to_strike: Decimal,
    /// `|current_price - strike|` in price units.
    pub distance_to_strike_abs: Decimal,
    /// Urgency; higher is more urgent.
    pub priority_score: Decimal,
    /// Rule that matched.
    pub reason: PriorityReason,
}

impl PriorityOption {
    /// Human-readable explanation, rounded for display.
    #[must_use]
    pub fn reason_label(&self) -> String {
        match self.reason {
            PriorityReason::Itm => format!("ITM by {:.1}%", self.distance_to_strike.abs()),
            PriorityReason::HighDelta => format!("Delta {:.2}", self.position.delta()),
            PriorityReason::NearStrike => {
                format!("{:.1}% from strike", self.distance_to_strike.abs())
            }
            PriorityReason::ExpiringSoon => format!("{}d to expiry", self.position.dte()),
        }
    }

    /// Whether the score was computed from a proxy price.
    #[must_use]
    pub fn is_estimated(&self) -> bool {
        self.price_source == PriceSource::Fallback
    }
}
