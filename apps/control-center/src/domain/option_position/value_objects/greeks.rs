//! Option Greeks as reported by the position feed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-contract Greeks and implied volatility.
///
/// Every field is optional: feeds frequently omit them for illiquid contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta - directional exposure per contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<Decimal>,
    /// Gamma - rate of change of delta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<Decimal>,
    /// Theta - time decay per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<Decimal>,
    /// Vega - sensitivity to volatility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vega: Option<Decimal>,
    /// Implied volatility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<Decimal>,
}

impl Greeks {
    /// Greeks with only delta set.
    #[must_use]
    pub fn with_delta(delta: Decimal) -> Self {
        Self {
            delta: Some(delta),
            ..Self::default()
        }
    }

    /// Delta, treating a missing value as zero.
    #[must_use]
    pub fn delta_or_zero(&self) -> Decimal {
        self.delta.unwrap_or(Decimal::ZERO)
    }

    /// Theta, treating a missing value as zero.
    #[must_use]
    pub fn theta_or_zero(&self) -> Decimal {
        self.theta.unwrap_or(Decimal::ZERO)
    }
}
