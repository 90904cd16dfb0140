use std::collections::HashMap;
use std::collections::hash_map;

use super::Isbn;

/// 注文（カート）
///
/// ISBNから要求数量へのマッピング。外部から受け取った注文をそのまま表現するため、
/// ISBNが欠落したエントリや数量が欠落したエントリも保持できる。
/// 欠落エントリの扱いは価格計算時に決まる（`CartPricingError` を参照）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: HashMap<Option<Isbn>, Option<u32>>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// ISBNと数量がそろった明細を追加する
    pub fn with_line(mut self, isbn: impl Into<Isbn>, quantity: u32) -> Self {
        self.lines.insert(Some(isbn.into()), Some(quantity));
        self
    }

    /// 欠落を含みうる明細を追加する
    ///
    /// 同じキーが既にある場合は上書きする。
    pub fn insert(&mut self, isbn: Option<Isbn>, quantity: Option<u32>) {
        self.lines.insert(isbn, quantity);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> hash_map::Iter<'_, Option<Isbn>, Option<u32>> {
        self.lines.iter()
    }
}

impl FromIterator<(Isbn, u32)> for Order {
    fn from_iter<T: IntoIterator<Item = (Isbn, u32)>>(iter: T) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(|(isbn, quantity)| (Some(isbn), Some(quantity)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_with_line_overwrites_same_isbn() {
        let order = Order::new().with_line("validISBN", 5).with_line("validISBN", 2);

        assert_eq!(order.len(), 1);
        let (_, quantity) = order.lines().next().unwrap();
        assert_eq!(*quantity, Some(2));
    }

    #[test]
    fn test_insert_keeps_absent_entries() {
        let mut order = Order::new();
        order.insert(None, None);
        order.insert(None, Some(3));
        order.insert(Some(Isbn::from("exampleISBN")), None);

        // 欠落キーは1つのキーとして扱われる
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let order: Order = [(Isbn::from("a"), 1), (Isbn::from("b"), 2)]
            .into_iter()
            .collect();

        assert_eq!(order, Order::new().with_line("a", 1).with_line("b", 2));
    }
}
