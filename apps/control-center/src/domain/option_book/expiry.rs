//! Expiry labels and buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard label for days to expiry.
///
/// `Expired` at or below zero, days up to a week, then whole weeks (rounded up)
/// up to 30 days, then whole months of 30 days (rounded up).
#[must_use]
pub fn dte_label(dte: i64) -> String {
    match dte {
        i64::MIN..=0 => "Expired".to_string(),
        1 => "1 day".to_string(),
        2..=7 => format!("{dte} days"),
        8..=30 => format!("{} weeks", div_ceil(dte, 7)),
        _ => format!("{} months", div_ceil(dte, 30)),
    }
}

const fn div_ceil(value: i64, step: i64) -> i64 {
    (value + step - 1) / step
}

/// Expiry horizon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpiryBucket {
    /// Seven days or fewer, including expired.
    #[serde(rename = "0-7d")]
    Week,
    /// 8 to 30 days.
    #[serde(rename = "8-30d")]
    Month,
    /// 31 to 60 days.
    #[serde(rename = "31-60d")]
    TwoMonths,
    /// More than 60 days.
    #[serde(rename = "60d+")]
    Beyond,
}

impl ExpiryBucket {
    /// Bucket for `dte`.
    #[must_use]
    pub const fn from_dte(dte: i64) -> Self {
        if dte <= 7 {
            Self::Week
        } else if dte <= 30 {
            Self::Month
        } else if dte <= 60 {
            Self::TwoMonths
        } else {
            Self::Beyond
        }
    }

    /// Short label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Week => "0-7d",
            Self::Month => "8-30d",
            Self::TwoMonths => "31-60d",
            Self::Beyond => "60d+",
        }
    }
}

impl fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
