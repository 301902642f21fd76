//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root owns a cluster of objects and is the only entry point
/// for changing them. Kept intentionally small: each bounded context decides
/// how it models its own operations.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
