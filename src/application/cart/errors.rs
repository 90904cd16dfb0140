use crate::domain::Isbn;
use thiserror::Error;

/// カート価格計算アプリケーション層のエラー
///
/// いずれも現在の注文に対して致命的。リトライは行わない。
#[derive(Debug, Error)]
pub enum CartPricingError {
    /// 注文明細にISBNがない
    #[error("Order line has no ISBN")]
    MissingIsbn,

    /// 注文明細に数量がない
    #[error("Order line for ISBN {0} has no quantity")]
    MissingQuantity(Isbn),

    /// 在庫に存在しないISBN（UnknownIsbnPolicy::Rejectの場合）
    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    /// 合計金額が `u64` の範囲を超えた
    #[error("Cart total overflows at ISBN {0}")]
    TotalOverflow(Isbn),

    /// InventoryLookupのエラー
    #[error("Inventory lookup error")]
    InventoryLookup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// PurchaseExecutorのエラー
    #[error("Purchase executor error")]
    PurchaseExecutor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CartPricingError>;
