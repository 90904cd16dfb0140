use super::Book;

/// 1明細の突き合わせ結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    /// 在庫から提供できる冊数: `min(要求数, 在庫数)`
    pub fulfillable: u32,
    /// 提供できなかった冊数: `要求数 - 提供可能数`
    pub unavailable: u32,
    /// 明細の小計: `提供可能数 * 価格`
    pub line_total: u64,
}

impl LineOutcome {
    pub fn has_shortfall(&self) -> bool {
        self.unavailable > 0
    }
}

/// 要求数と在庫数を突き合わせる（純粋な関数）
///
/// ビジネスルール：
/// - 在庫を超える分は提供せず、不足分として数える
/// - 要求数0は不足ではない
pub fn reconcile_line(book: &Book, requested: u32) -> LineOutcome {
    let fulfillable = requested.min(book.stock());

    LineOutcome {
        fulfillable,
        unavailable: requested - fulfillable,
        line_total: u64::from(fulfillable) * u64::from(book.price()),
    }
}
