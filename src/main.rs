use rusty_bookstore_ddd::{
    adapters::mock::{
        inventory_lookup::InventoryLookup as InMemoryInventoryLookup,
        purchase_executor::PurchaseExecutor as RecordingPurchaseExecutor,
    },
    application::cart::CartPricer,
    config::PricingConfig,
    domain::{Book, Order},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_bookstore_ddd=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PricingConfig::from_env()?;
    tracing::info!(
        unknown_isbn_policy = config.unknown_isbn_policy.as_str(),
        "Loaded pricing config"
    );

    // Initialize adapters
    let inventory_lookup = Arc::new(InMemoryInventoryLookup::from_iter([
        Book::new("validISBN", 2, 4),
        Book::new("validISBN2", 10, 5),
    ]));
    let purchase_executor = Arc::new(RecordingPurchaseExecutor::new());

    let pricer = CartPricer::with_config(inventory_lookup, purchase_executor.clone(), config);

    let order = Order::new()
        .with_line("validISBN", 5)
        .with_line("validISBN2", 10);

    if let Some(summary) = pricer.price_cart(Some(&order)).await? {
        tracing::info!(total_price = summary.total_price(), "Cart total");
        for (book, quantity) in summary.unavailable() {
            tracing::info!(isbn = %book.isbn(), quantity, "Unavailable");
        }
    }

    for (book, quantity) in purchase_executor.purchases() {
        tracing::info!(isbn = %book.isbn(), quantity, "Purchased");
    }

    Ok(())
}
