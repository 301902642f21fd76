use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use acme_core::{AggregateRoot, CurrencyCode, Decimal, DomainError, DomainResult, Money, ValueObject};
use acme_scm::SupplierId;

use crate::item::PurchaseOrderItem;
use crate::product_id::ProductId;

/// Purchase order number (e.g. `PO456`). Uniqueness is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn new(number: impl Into<String>) -> DomainResult<Self> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "order number must not be blank",
            ));
        }
        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for OrderNumber {}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderNumber> for String {
    fn from(value: OrderNumber) -> Self {
        value.0
    }
}

/// Aggregate root: PurchaseOrder.
///
/// The header (number, supplier, date, currency) is fixed at construction.
/// Items only ever accumulate through [`PurchaseOrder::add_item`], which
/// prices each one in the order's currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    order_number: OrderNumber,
    supplier_id: SupplierId,
    order_date: DateTime<Utc>,
    currency: CurrencyCode,
    items: Vec<PurchaseOrderItem>,
}

impl PurchaseOrder {
    /// Open a new, empty purchase order.
    ///
    /// Fails with `InvalidArgument` if the order number is blank or the
    /// currency is not a 3-letter code.
    pub fn new(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        order_date: DateTime<Utc>,
        currency: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            order_number: OrderNumber::new(order_number)?,
            supplier_id,
            order_date,
            currency: CurrencyCode::new(currency)?,
            items: Vec::new(),
        })
    }

    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    /// Append a line priced in the order's currency.
    ///
    /// Fails with `OutOfRange` if `quantity <= 0`, `unit_price_amount < 0`, or
    /// the order total would no longer be representable. On failure the
    /// order is left untouched.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::out_of_range("quantity must be greater than zero"));
        }
        if unit_price_amount < Decimal::ZERO {
            return Err(DomainError::out_of_range("unit price must not be negative"));
        }

        let unit_price = Money::from_code(unit_price_amount, self.currency.clone());
        let item = PurchaseOrderItem::new(product_id, quantity, unit_price)?;

        if self
            .total_amount()
            .checked_add(item.calculate_item_total().amount())
            .is_none()
        {
            return Err(DomainError::out_of_range("order total overflows"));
        }

        self.items.push(item);
        Ok(())
    }

    /// Sum of all line totals, in the order's currency. Zero when empty.
    pub fn calculate_order_total(&self) -> Money {
        Money::from_code(self.total_amount(), self.currency.clone())
    }

    // Every item was priced in `self.currency` by `add_item`, so the amounts
    // share a currency and can be summed directly.
    fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.calculate_item_total().amount())
            .sum()
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = OrderNumber;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_supplier_id() -> SupplierId {
        SupplierId::new("SUP123").unwrap()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_order() -> PurchaseOrder {
        PurchaseOrder::new("PO456", test_supplier_id(), test_time(), "USD").unwrap()
    }

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, "USD").unwrap()
    }

    #[test]
    fn new_order_has_no_items_and_zero_total() {
        let order = test_order();
        assert!(order.items().is_empty());
        assert_eq!(order.calculate_order_total(), usd(Decimal::ZERO));
        assert_eq!(order.id().as_str(), "PO456");
        assert_eq!(order.supplier_id(), &test_supplier_id());
    }

    #[test]
    fn construction_rejects_blank_order_number() {
        for bad in ["", "   "] {
            let err = PurchaseOrder::new(bad, test_supplier_id(), test_time(), "USD").unwrap_err();
            match err {
                DomainError::InvalidArgument(msg) if msg.contains("order number") => {}
                other => panic!("Expected InvalidArgument for order number, got {other:?}"),
            }
        }
    }

    #[test]
    fn construction_rejects_malformed_currency() {
        for bad in ["US", "", "   ", "USDT"] {
            let err = PurchaseOrder::new("PO456", test_supplier_id(), test_time(), bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn blank_supplier_id_never_reaches_the_order() {
        assert!(SupplierId::new("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn order_total_sums_item_totals() {
        let mut order = test_order();
        order.add_item(ProductId::new(), 10, Decimal::new(1550, 2)).unwrap();
        order.add_item(ProductId::new(), 5, Decimal::new(2500, 2)).unwrap();

        let total = order.calculate_order_total();
        assert_eq!(total, usd(Decimal::new(28000, 2)));
        assert_eq!(total.to_string(), "280.00 USD");
    }

    #[test]
    fn order_total_matches_money_fold_over_items() {
        let mut order = test_order();
        order.add_item(ProductId::new(), 3, Decimal::new(199, 2)).unwrap();
        order.add_item(ProductId::new(), 7, Decimal::new(1005, 3)).unwrap();

        let folded = order
            .items()
            .iter()
            .try_fold(Money::zero(order.currency().clone()), |acc, item| {
                acc.add(&item.calculate_item_total())
            })
            .unwrap();
        assert_eq!(order.calculate_order_total(), folded);
    }

    #[test]
    fn add_item_rejects_out_of_range_inputs() {
        let mut order = test_order();

        for (quantity, price) in [
            (0, Decimal::ONE),
            (-1, Decimal::ONE),
            (1, Decimal::new(-1, 2)),
        ] {
            let err = order.add_item(ProductId::new(), quantity, price).unwrap_err();
            assert!(err.is_out_of_range(), "({quantity}, {price}) should be rejected");
        }

        assert!(order.items().is_empty());
    }

    #[test]
    fn add_item_accepts_boundary_values() {
        let mut order = test_order();
        order.add_item(ProductId::new(), 1, Decimal::ZERO).unwrap();

        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), 1);
        assert_eq!(order.calculate_order_total(), usd(Decimal::ZERO));
    }

    #[test]
    fn items_are_priced_in_the_order_currency() {
        let mut order = PurchaseOrder::new("PO789", test_supplier_id(), test_time(), "eur").unwrap();
        order.add_item(ProductId::new(), 2, Decimal::new(999, 2)).unwrap();
        order.add_item(ProductId::new(), 3, Decimal::new(100, 0)).unwrap();

        let currencies: Vec<_> = order
            .items()
            .iter()
            .map(|item| item.unit_price().currency().as_str())
            .collect();
        assert_eq!(currencies, ["EUR", "EUR"]);
        assert_eq!(order.calculate_order_total().currency().as_str(), "EUR");
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut order = test_order();
        let first = ProductId::new();
        let second = ProductId::new();
        order.add_item(first, 1, Decimal::ONE).unwrap();
        order.add_item(second, 1, Decimal::ONE).unwrap();

        let ids: Vec<_> = order.items().iter().map(PurchaseOrderItem::product_id).collect();
        assert_eq!(ids, [first, second]);
    }

    #[test]
    fn overflowing_total_is_rejected_without_side_effects() {
        let mut order = test_order();
        order.add_item(ProductId::new(), 1, Decimal::MAX).unwrap();

        let err = order.add_item(ProductId::new(), 1, Decimal::MAX).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.calculate_order_total().amount(), Decimal::MAX);
    }

    #[test]
    fn items_serialise_with_string_amounts() {
        let mut order = test_order();
        order.add_item(ProductId::new(), 10, Decimal::new(1550, 2)).unwrap();

        let json = serde_json::to_value(order.items()).unwrap();
        assert_eq!(json[0]["quantity"], 10);
        assert_eq!(json[0]["unit_price"]["amount"], "15.50");
        assert_eq!(json[0]["unit_price"]["currency"], "USD");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the order total equals the exact sum of price × quantity
        /// over every successfully added line.
        #[test]
        fn total_is_sum_of_lines(
            lines in prop::collection::vec((1i64..1_000, 0i64..1_000_000), 0..20)
        ) {
            let mut order = test_order();
            let mut expected_cents: i64 = 0;

            for (quantity, cents) in lines {
                order.add_item(ProductId::new(), quantity, Decimal::new(cents, 2)).unwrap();
                expected_cents += quantity * cents;
            }

            prop_assert_eq!(order.calculate_order_total(), usd(Decimal::new(expected_cents, 2)));
        }

        /// Property: a rejected add leaves the item sequence unchanged.
        #[test]
        fn rejected_add_is_atomic(
            valid in 0usize..5,
            quantity in -1_000i64..=0,
        ) {
            let mut order = test_order();
            for _ in 0..valid {
                order.add_item(ProductId::new(), 1, Decimal::ONE).unwrap();
            }
            let before = order.clone();

            prop_assert!(order.add_item(ProductId::new(), quantity, Decimal::ONE).is_err());
            prop_assert_eq!(order, before);
        }
    }
}
