//! Supply chain management module (suppliers).
//!
//! Suppliers are plain validated records: the procurement context only needs
//! a [`SupplierId`] it can trust.

pub mod supplier;

pub use supplier::{Supplier, SupplierId};
