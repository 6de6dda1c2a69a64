//! Symbol value object for instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Length of the OCC suffix: `YYMMDD` + `P`/`C` + 8-digit strike.
const OCC_SUFFIX_LEN: usize = 15;

/// A trading symbol (ticker or OCC option symbol).
///
/// Examples:
/// - Equity: "AAPL", "MSFT", "GOOGL"
/// - Option: "AAPL250117P00190000", or the space-padded "AAPL  250117P00190000"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is an option symbol (OCC format).
    ///
    /// OCC format: `{ROOT}{YY}{MM}{DD}{P/C}{PRICE}` where the root may be
    /// right-padded with spaces to six characters.
    #[must_use]
    pub fn is_option(&self) -> bool {
        let s = self.0.as_bytes();
        if s.len() <= OCC_SUFFIX_LEN {
            return false;
        }
        let suffix = &s[s.len() - OCC_SUFFIX_LEN..];
        let (date, rest) = suffix.split_at(6);
        let (right, strike) = rest.split_at(1);

        date.iter().all(u8::is_ascii_digit)
            && matches!(right[0], b'P' | b'C')
            && strike.iter().all(u8::is_ascii_digit)
    }

    /// Extract the underlying ticker from an option symbol.
    ///
    /// Returns the full symbol if it's not an option.
    #[must_use]
    pub fn underlying(&self) -> Self {
        if self.is_option() {
            let root = &self.0[..self.0.len() - OCC_SUFFIX_LEN];
            Self(root.trim_end().to_string())
        } else {
            self.clone()
        }
    }

    /// Validate the symbol.
    ///
    /// # Errors
    ///
    /// Returns error if the symbol is empty, too long, or contains characters
    /// other than ASCII alphanumerics, spaces (OCC padding) and dots (share classes).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::invalid_value("symbol", "Symbol cannot be empty"));
        }

        if self.0.len() > 21 {
            return Err(DomainError::invalid_value(
                "symbol",
                "Symbol exceeds maximum length",
            ));
        }

        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '.')
        {
            return Err(DomainError::invalid_value(
                "symbol",
                "Symbol contains invalid characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
