use crate::domain::{Book, Isbn};
use crate::ports::inventory_lookup::{InventoryLookup as InventoryLookupTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// InventoryLookupのインメモリ実装
///
/// ISBNごとに書籍を保存することで状態を持ったテストをサポート。
/// 同じISBNを再登録すると価格・在庫が置き換わる。
pub struct InventoryLookup {
    books: Mutex<HashMap<Isbn, Book>>,
}

impl InventoryLookup {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に書籍を登録
    pub fn add_book(&self, book: Book) {
        self.books
            .lock()
            .unwrap()
            .insert(book.isbn().clone(), book);
    }
}

impl Default for InventoryLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Book> for InventoryLookup {
    fn from_iter<T: IntoIterator<Item = Book>>(iter: T) -> Self {
        let inventory = Self::new();
        for book in iter {
            inventory.add_book(book);
        }
        inventory
    }
}

#[async_trait]
impl InventoryLookupTrait for InventoryLookup {
    /// 登録された書籍の中から検索
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        Ok(self.books.lock().unwrap().get(isbn).cloned())
    }
}
