//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this workspace
/// that means private fields, validated constructors returning
/// [`DomainResult`](crate::DomainResult), and accessor methods only:
///
/// - `Money { amount: 15.50, currency: USD }` is a value object
/// - `PurchaseOrder { order_number: "PO456", .. }` is an aggregate root
///
/// The trait requires:
/// - **Clone**: value objects are passed around by value
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
