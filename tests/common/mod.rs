use rusty_bookstore_ddd::adapters::mock::{InventoryLookup, PurchaseExecutor};
use rusty_bookstore_ddd::application::cart::CartPricer;
use rusty_bookstore_ddd::config::PricingConfig;
use rusty_bookstore_ddd::domain::Book;
use std::sync::Arc;

/// テスト用のCartPricerを作成
///
/// 渡された書籍をインメモリ在庫に登録し、購入記録を確認できるように
/// PurchaseExecutorのモックも返します。
pub fn setup_pricer(
    books: impl IntoIterator<Item = Book>,
    config: PricingConfig,
) -> (CartPricer, Arc<PurchaseExecutor>) {
    let inventory_lookup = Arc::new(InventoryLookup::from_iter(books));
    let purchase_executor = Arc::new(PurchaseExecutor::new());

    let pricer = CartPricer::with_config(inventory_lookup, purchase_executor.clone(), config);

    (pricer, purchase_executor)
}
