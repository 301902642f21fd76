//! Money value object.
//!
//! A decimal amount paired with a [`CurrencyCode`]. Arithmetic and comparison
//! only succeed when both operands share the same currency; there is no
//! implicit conversion.

use core::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// An immutable monetary value.
///
/// The amount is fixed-point (`Decimal`), never floating point. The sign is not
/// constrained here: callers that need a non-negative amount (unit prices)
/// check it where the value is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Create a value from an amount and a raw currency code.
    ///
    /// Fails with `InvalidArgument` if `currency` is blank or not exactly three
    /// letters.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        Ok(Self::from_code(amount, CurrencyCode::new(currency)?))
    }

    /// Create a value from an already validated currency code.
    pub fn from_code(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency.
    pub fn zero(currency: CurrencyCode) -> Self {
        Self::from_code(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Sum of two values in the same currency.
    ///
    /// Fails with `CurrencyMismatch` for differing currencies and with
    /// `OutOfRange` if the sum exceeds the decimal range.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::out_of_range("money sum overflows"))?;
        Ok(Self::from_code(amount, self.currency.clone()))
    }

    /// Compare two values in the same currency.
    pub fn try_cmp(&self, other: &Money) -> DomainResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::currency_mismatch(
                &self.currency,
                &other.currency,
            ));
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
