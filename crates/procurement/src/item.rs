use serde::Serialize;

use acme_core::{Decimal, DomainError, DomainResult, Money, ValueObject};

use crate::product_id::ProductId;

/// Purchase order line: product, quantity, unit price.
///
/// Has no identity of its own; it only exists inside the
/// [`PurchaseOrder`](crate::PurchaseOrder) that created it and is never
/// modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
}

impl PurchaseOrderItem {
    /// Build a line item.
    ///
    /// Fails with `OutOfRange` if `quantity <= 0`, if the unit price is
    /// negative, or if the line total cannot be represented.
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::out_of_range("quantity must be greater than zero"));
        }
        if unit_price.is_negative() {
            return Err(DomainError::out_of_range("unit price must not be negative"));
        }
        if unit_price
            .amount()
            .checked_mul(Decimal::from(quantity))
            .is_none()
        {
            return Err(DomainError::out_of_range("line total overflows"));
        }

        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// `unit_price × quantity`, in the unit price's currency.
    pub fn calculate_item_total(&self) -> Money {
        Money::from_code(
            self.unit_price.amount() * Decimal::from(self.quantity),
            self.unit_price.currency().clone(),
        )
    }
}

impl ValueObject for PurchaseOrderItem {}
