//! # Cart Demo
//!
//! Builds a sample cart, logs its totals and prints the snapshot as JSON.
//!
//! ## Usage
//! ```bash
//! cargo run -p cart-demo
//!
//! # More detail, another customer
//! RUST_LOG=trace CARTWHEEL_CUSTOMER_ID=customer-42 cargo run -p cart-demo
//! ```

mod config;

use std::sync::Arc;

use cartwheel_core::{
    BulkProduct, Cart, CartDiscount, CartItem, CatalogProduct, Condition, Discount, Freebie,
    Money, Percentage, Product, Reward,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

type SharedProduct = Arc<dyn Product>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::from_env();
    info!(customer_id = %config.customer_id, "Building demo cart");

    let coffee: SharedProduct = Arc::new(CatalogProduct::new(
        "coffee-beans",
        "COF-001",
        "Coffee Beans 1kg",
        1899,
    ));
    let mug: SharedProduct = Arc::new(CatalogProduct::new("mug", "MUG-001", "Mug", 799));
    let cola: SharedProduct = Arc::new(BulkProduct {
        id: "cola-330".to_string(),
        name: "Cola 330ml".to_string(),
        price_cents: 199,
        bundle_size: 6,
        bundle_price_cents: 999,
    });

    let mut cart: Cart<SharedProduct> = Cart::try_create(config.customer_id.clone())?;
    cart.try_add(CartItem::new(Arc::clone(&coffee), 2))?;
    cart.try_add(CartItem::new(Arc::clone(&cola), 8))?;

    cart.try_add_discount(CartDiscount::new(
        "welcome",
        Discount::fixed(Money::from_cents(500)),
    ))?;
    cart.try_add_discount(CartDiscount::new(
        "loyalty",
        Discount::capped_percentage(Percentage::from_percent(10), Money::from_cents(300)),
    ))?;

    cart.add_freebie(Freebie::new(
        "mug-with-coffee",
        Condition::contains(coffee),
        Reward::new(mug, 1),
    ));

    for applied in cart.discount_breakdown() {
        info!(
            name = %applied.name,
            amount = %config.format_currency(applied.amount.cents()),
            "Discount applied"
        );
    }

    let snapshot = cart.snapshot();
    info!(
        lines = snapshot.totals.line_count,
        quantity = snapshot.totals.total_quantity,
        subtotal = %config.format_currency(snapshot.totals.subtotal.cents()),
        total = %config.format_currency(snapshot.totals.total.cents()),
        "Cart totals"
    );

    println!("{}", snapshot.to_json()?);
    Ok(())
}

/// Installs the log subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` when set
/// - Default: INFO, DEBUG for cart mutations
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cartwheel_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
