//! `acme-core` — shared kernel for the ACME procurement domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the value object / aggregate root traits, and the value
//! objects shared by every bounded context (`Money`, `CurrencyCode`, `Address`).

pub mod address;
pub mod aggregate;
pub mod currency;
pub mod error;
pub mod money;
pub mod value_object;

pub use address::Address;
pub use aggregate::AggregateRoot;
pub use currency::CurrencyCode;
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;

/// Re-exported so downstream crates agree on a single decimal type.
pub use rust_decimal::Decimal;
