use anyhow::Context;
use chrono::Utc;
use rand::RngCore;

use acme_core::{Address, Decimal};
use acme_procurement::{ProductId, PurchaseOrder};
use acme_scm::Supplier;

use crate::config::DemoConfig;

/// Build the demo supplier and order and add the two demo lines.
///
/// Product ids are drawn from `rng`.
pub fn run<R: RngCore + ?Sized>(config: &DemoConfig, rng: &mut R) -> anyhow::Result<PurchaseOrder> {
    let address = Address::new("123 Main St", "1213", "Metropolis", "NY", "12345", "USA")
        .context("invalid supplier address")?;
    let supplier = Supplier::new(config.supplier_id.as_str(), "Acme Supplies", address)
        .context("invalid supplier")?;

    let mut order = PurchaseOrder::new(
        config.order_number.as_str(),
        supplier.id_typed().clone(),
        Utc::now(),
        &config.currency,
    )
    .context("invalid purchase order header")?;

    tracing::info!(
        order_number = %order.order_number(),
        supplier_id = %order.supplier_id(),
        currency = %order.currency(),
        "purchase order opened"
    );

    for (quantity, unit_price) in [(10, Decimal::new(1550, 2)), (5, Decimal::new(2500, 2))] {
        let product_id = ProductId::generate(rng);
        order
            .add_item(product_id, quantity, unit_price)
            .with_context(|| format!("failed to add {quantity} x {unit_price} of {product_id}"))?;
        tracing::info!(%product_id, quantity, %unit_price, "item added");
    }

    tracing::info!(
        order_number = %order.order_number(),
        total = %order.calculate_order_total(),
        "order total calculated"
    );

    Ok(order)
}
