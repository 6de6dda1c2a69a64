//! Option right (put or call).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option right, carried as `putCall` on position rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionRight {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionRight {
    /// Check if this is a put.
    #[must_use]
    pub const fn is_put(self) -> bool {
        matches!(self, Self::Put)
    }

    /// Check if this is a call.
    #[must_use]
    pub const fn is_call(self) -> bool {
        matches!(self, Self::Call)
    }

    /// Whether a contract with this right and `strike` is in the money at
    /// `underlying_price`.
    ///
    /// A put is ITM strictly below the strike, a call strictly above it.
    #[must_use]
    pub fn is_in_the_money(self, strike: Decimal, underlying_price: Decimal) -> bool {
        match self {
            Self::Put => underlying_price < strike,
            Self::Call => underlying_price > strike,
        }
    }
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn option_right_display() {
        assert_eq!(OptionRight::Call.to_string(), "CALL");
        assert_eq!(OptionRight::Put.to_string(), "PUT");
    }

    #[test]
    fn option_right_serde() {
        assert_eq!(serde_json::to_string(&OptionRight::Put).unwrap(), "\"PUT\"");
        let parsed: OptionRight = serde_json::from_str("\"CALL\"").unwrap();
        assert_eq!(parsed, OptionRight::Call);
    }

    #[test]
    fn put_itm_below_strike_only() {
        assert!(OptionRight::Put.is_in_the_money(dec!(150), dec!(145)));
        assert!(!OptionRight::Put.is_in_the_money(dec!(150), dec!(150)));
        assert!(!OptionRight::Put.is_in_the_money(dec!(150), dec!(155)));
    }

    #[test]
    fn call_itm_above_strike_only() {
        assert!(OptionRight::Call.is_in_the_money(dec!(200), dec!(210)));
        assert!(!OptionRight::Call.is_in_the_money(dec!(200), dec!(200)));
        assert!(!OptionRight::Call.is_in_the_money(dec!(200), dec!(180)));
    }
}
