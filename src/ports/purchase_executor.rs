use crate::domain::Book;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 購入実行ポート
///
/// 明細ごとの購入処理（在庫引当、発注など）を抽象化する。
/// 価格計算はこの処理の中身を知らない。
#[async_trait]
pub trait PurchaseExecutor: Send + Sync {
    /// 提供可能な冊数を購入する
    ///
    /// 明細ごとに1回呼ばれる。在庫がない場合は `quantity` が0になる。
    async fn buy_book(&self, book: &Book, quantity: u32) -> Result<()>;
}
