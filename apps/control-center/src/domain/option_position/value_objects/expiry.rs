//! Days-to-expiry arithmetic.

use chrono::NaiveDate;

/// Calendar days from `as_of` to `expiration`.
///
/// Negative once the contract has expired.
#[must_use]
pub fn days_to_expiry(expiration: NaiveDate, as_of: NaiveDate) -> i64 {
    (expiration - as_of).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_expiry_is_positive() {
        assert_eq!(days_to_expiry(date(2025, 1, 17), date(2025, 1, 10)), 7);
    }

    #[test]
    fn expiry_day_is_zero() {
        assert_eq!(days_to_expiry(date(2025, 1, 17), date(2025, 1, 17)), 0);
    }

    #[test]
    fn expired_is_negative() {
        assert_eq!(days_to_expiry(date(2025, 1, 17), date(2025, 1, 20)), -3);
    }
}
