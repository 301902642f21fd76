//! Procurement domain module (purchase orders).
//!
//! This crate contains the business rules for purchase orders, implemented
//! purely as deterministic domain logic (no IO, no storage). A
//! [`PurchaseOrder`] owns its [`PurchaseOrderItem`]s and guarantees that every
//! item is priced in the order's currency.

pub mod item;
pub mod order;
pub mod product_id;

pub use item::PurchaseOrderItem;
pub use order::{OrderNumber, PurchaseOrder};
pub use product_id::ProductId;
