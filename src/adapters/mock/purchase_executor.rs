use crate::domain::Book;
use crate::ports::purchase_executor::{PurchaseExecutor as PurchaseExecutorTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of PurchaseExecutor
///
/// Performs no real purchase. Records every call so tests can
/// inspect which books were bought and in what quantity.
pub struct PurchaseExecutor {
    purchases: Mutex<Vec<(Book, u32)>>,
}

impl PurchaseExecutor {
    pub fn new() -> Self {
        Self {
            purchases: Mutex::new(Vec::new()),
        }
    }

    /// Purchases recorded so far, in call order
    pub fn purchases(&self) -> Vec<(Book, u32)> {
        self.purchases.lock().unwrap().clone()
    }
}

impl Default for PurchaseExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PurchaseExecutorTrait for PurchaseExecutor {
    async fn buy_book(&self, book: &Book, quantity: u32) -> Result<()> {
        self.purchases.lock().unwrap().push((book.clone(), quantity));
        Ok(())
    }
}
