//! Domain error model.

use thiserror::Error;

use crate::currency::CurrencyCode;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is raised synchronously by a constructor or operation and
/// returned to the caller unchanged; the domain never logs or recovers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value is missing or a string-shaped value is malformed
    /// (currency code, identifier, order number).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric input violates a bound (quantity <= 0, negative price).
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Two monetary values in different currencies were combined.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: CurrencyCode,
        right: CurrencyCode,
    },
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn currency_mismatch(left: &CurrencyCode, right: &CurrencyCode) -> Self {
        Self::CurrencyMismatch {
            left: left.clone(),
            right: right.clone(),
        }
    }

    /// Whether this is an `InvalidArgument` failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this is an `OutOfRange` failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}
