//! Cart Receipt Example
//!
//! Loads a store fixture, fills a cart and prints a receipt.
//!
//! Use `-f` to load a fixture set by name
//! Pass `PRODUCT_ID[:QUANTITY]` arguments to choose the cart contents

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use groceryglide::{
    cart::Cart,
    fixtures::Fixture,
    receipt::CartReceipt,
    utils::{ExampleCartArgs, LogFormat, LoggingConfig},
};

/// Cart Receipt Example
pub fn main() -> Result<()> {
    let args = ExampleCartArgs::parse();

    init_logging(&args.logging)?;

    let store = Fixture::from_set(&args.fixture)?;
    let catalog = &store.catalog;

    let mut cart = Cart::new();

    if args.items.is_empty() {
        for (key, _) in catalog.on_sale() {
            cart.add_item(key)?;
        }
    }

    for entry in &args.items {
        let key = catalog
            .key_for(&entry.product_id)
            .with_context(|| format!("unknown product: {}", entry.product_id))?;

        cart.add_quantity(key, entry.quantity)?;
    }

    info!(
        fixture = %args.fixture,
        lines = cart.len(),
        units = cart.item_count(),
        "cart filled"
    );

    let receipt = CartReceipt::from_cart(&cart, catalog, &store.settings)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}
