use std::collections::HashMap;

use super::{Book, Isbn};

/// 価格計算の結果
///
/// 不変条件：`unavailable` に書籍のエントリが存在するのは、
/// 提供可能数が要求数を下回った場合のみ。値は `要求数 - 提供可能数`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseSummary {
    total_price: u64,
    unavailable: HashMap<Book, u32>,
    unresolved: HashMap<Isbn, u32>,
}

impl PurchaseSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// 在庫不足で提供できなかった冊数（書籍ごと）
    pub fn unavailable(&self) -> &HashMap<Book, u32> {
        &self.unavailable
    }

    /// 在庫に存在しなかったISBNとその要求数
    ///
    /// `UnknownIsbnPolicy::TreatAsOutOfStock` の場合のみ記録される。
    pub fn unresolved(&self) -> &HashMap<Isbn, u32> {
        &self.unresolved
    }

    /// 合計に加算する。`u64` を超える場合は `None` を返し、合計は変更しない
    pub(crate) fn add_to_total(&mut self, amount: u64) -> Option<u64> {
        self.total_price = self.total_price.checked_add(amount)?;
        Some(self.total_price)
    }

    pub(crate) fn add_unavailable(&mut self, book: Book, quantity: u32) {
        self.unavailable.insert(book, quantity);
    }

    pub(crate) fn add_unresolved(&mut self, isbn: Isbn, quantity: u32) {
        self.unresolved.insert(isbn, quantity);
    }
}
