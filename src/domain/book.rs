use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::Isbn;

/// 書籍エンティティ
///
/// 在庫ルックアップが構築する不変の値。同一性はISBNのみで決まり、
/// 価格と在庫数は比較に含まれない。`Hash` も同じ規則に従うため、
/// `PurchaseSummary` の在庫不足マップのキーとして使用できる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    price: u32,
    stock: u32,
}

impl Book {
    pub fn new(isbn: impl Into<Isbn>, price: u32, stock: u32) -> Self {
        Self {
            isbn: isbn.into(),
            price,
            stock,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    /// 1冊あたりの価格（通貨単位）
    pub fn price(&self) -> u32 {
        self.price
    }

    /// 在庫数
    pub fn stock(&self) -> u32 {
        self.stock
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}
