use crate::domain::{Book, Isbn};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 在庫ルックアップポート
///
/// 価格計算と在庫管理の境界を維持する。
/// 価格計算は在庫の保存形式を知らず、ISBNから現在の書籍レコードを受け取るだけ。
#[async_trait]
pub trait InventoryLookup: Send + Sync {
    /// ISBNで書籍を検索する
    ///
    /// 在庫に存在しない場合は `Ok(None)` を返す。
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>>;
}
