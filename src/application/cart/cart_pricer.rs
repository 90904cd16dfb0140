use crate::config::{PricingConfig, UnknownIsbnPolicy};
use crate::domain::{Isbn, Order, PurchaseSummary, reconcile_line};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{CartPricingError, Result};

/// カートの価格計算サービス
///
/// 在庫ルックアップと購入実行を外部から注入する。
/// 呼び出し間で状態を持たず、注文とサマリーは1回の呼び出しの中だけで扱う。
#[derive(Clone)]
pub struct CartPricer {
    inventory_lookup: Arc<dyn InventoryLookup>,
    purchase_executor: Arc<dyn PurchaseExecutor>,
    config: PricingConfig,
}

impl CartPricer {
    pub fn new(
        inventory_lookup: Arc<dyn InventoryLookup>,
        purchase_executor: Arc<dyn PurchaseExecutor>,
    ) -> Self {
        Self::with_config(inventory_lookup, purchase_executor, PricingConfig::default())
    }

    pub fn with_config(
        inventory_lookup: Arc<dyn InventoryLookup>,
        purchase_executor: Arc<dyn PurchaseExecutor>,
        config: PricingConfig,
    ) -> Self {
        Self {
            inventory_lookup,
            purchase_executor,
            config,
        }
    }

    /// カートの合計金額を計算する
    ///
    /// ビジネスルール：
    /// - 注文がない（`None`）場合は `Ok(None)` を返す（エラーではない）
    /// - 各明細の提供可能数は `min(要求数, 在庫数)`、小計は `提供可能数 * 価格`
    /// - 要求数が在庫を超えた分は `unavailable` に記録する
    /// - 明細ごとに提供可能数で購入を実行する（0冊の場合も呼ぶ）
    ///
    /// 明細の処理順は結果に影響しない。
    ///
    /// # エラー
    /// - MissingIsbn / MissingQuantity: 明細に欠落がある（その明細の処理時点で中断）
    /// - BookNotFound: 在庫にないISBN（`UnknownIsbnPolicy::Reject` の場合）
    /// - TotalOverflow: 合計金額が `u64` を超えた
    /// - InventoryLookup / PurchaseExecutor: ポート層のエラー
    ///
    /// エラー発生前に処理済みの明細の購入は取り消されない。
    pub async fn price_cart(&self, order: Option<&Order>) -> Result<Option<PurchaseSummary>> {
        let Some(order) = order else {
            return Ok(None);
        };

        let mut summary = PurchaseSummary::new();

        for (isbn, quantity) in order.lines() {
            let isbn = isbn.as_ref().ok_or(CartPricingError::MissingIsbn)?;
            let requested =
                quantity.ok_or_else(|| CartPricingError::MissingQuantity(isbn.clone()))?;

            self.price_line(isbn, requested, &mut summary).await?;
        }

        tracing::info!(
            lines = order.len(),
            total_price = summary.total_price(),
            unavailable = summary.unavailable().len(),
            "Priced cart"
        );

        Ok(Some(summary))
    }

    async fn price_line(
        &self,
        isbn: &Isbn,
        requested: u32,
        summary: &mut PurchaseSummary,
    ) -> Result<()> {
        // 1. 在庫から書籍を取得
        let book = self
            .inventory_lookup
            .find_by_isbn(isbn)
            .await
            .map_err(CartPricingError::InventoryLookup)?;

        let Some(book) = book else {
            return match self.config.unknown_isbn_policy {
                UnknownIsbnPolicy::Reject => Err(CartPricingError::BookNotFound(isbn.clone())),
                UnknownIsbnPolicy::TreatAsOutOfStock => {
                    tracing::warn!(%isbn, requested, "Unknown ISBN treated as out of stock");
                    if requested > 0 {
                        summary.add_unresolved(isbn.clone(), requested);
                    }
                    Ok(())
                }
            };
        };

        // 2. 要求数と在庫数の突き合わせ
        let outcome = reconcile_line(&book, requested);

        tracing::debug!(
            %isbn,
            requested,
            fulfillable = outcome.fulfillable,
            line_total = outcome.line_total,
            "Priced order line"
        );

        // 3. サマリーに反映
        summary
            .add_to_total(outcome.line_total)
            .ok_or_else(|| CartPricingError::TotalOverflow(isbn.clone()))?;
        if outcome.has_shortfall() {
            tracing::warn!(%isbn, unavailable = outcome.unavailable, "Insufficient stock");
            summary.add_unavailable(book.clone(), outcome.unavailable);
        }

        // 4. 提供可能分の購入を実行
        self.purchase_executor
            .buy_book(&book, outcome.fulfillable)
            .await
            .map_err(CartPricingError::PurchaseExecutor)?;

        Ok(())
    }
}
