//! Option Position Errors

use thiserror::Error;

use crate::domain::shared::DomainError;

/// Errors that can occur with option positions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionPositionError {
    /// Position cannot be used for calculations (e.g. zero risk-bearing size).
    #[error("Invalid position {position_id}: {message}")]
    InvalidPosition {
        /// Offending position.
        position_id: String,
        /// What is wrong with it.
        message: String,
    },

    /// Invalid option contract terms.
    #[error("Invalid option contract: {message}")]
    InvalidContract {
        /// What is wrong with the contract.
        message: String,
    },

    /// A shared value object rejected its input.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl OptionPositionError {
    /// Shorthand for an [`OptionPositionError::InvalidPosition`].
    pub fn invalid_position(position_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPosition {
            position_id: position_id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OptionPositionError::invalid_position("pos-1", "zero contract size");
        assert_eq!(err.to_string(), "Invalid position pos-1: zero contract size");

        let err = OptionPositionError::InvalidContract {
            message: "strike must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid option contract: strike must be positive"
        );

        let err: OptionPositionError =
            DomainError::invalid_value("symbol", "Symbol cannot be empty").into();
        assert_eq!(
            err.to_string(),
            "Invalid value for symbol: Symbol cannot be empty"
        );
    }
}
