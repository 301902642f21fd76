use acme_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    acme_observability::init();

    let config = DemoConfig::from_env();
    let order = acme_demo::run(&config, &mut rand::rng())?;

    println!("Order Total: {}", order.calculate_order_total());
    Ok(())
}
