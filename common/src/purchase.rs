//! 購入リンク（メッセージアプリへのディープリンク）
//!
//! 応答は待たない。リンクを開くだけ。

use crate::format::url_encode;
use crate::types::Product;

/// メッセージ送信先のベースURL
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

/// 購入メッセージの定型文（デフォルト）
pub const DEFAULT_GREETING: &str = "Hola, quiero comprar:";

/// 購入リンクの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseLink {
    /// 国番号込みの電話番号（数字のみ）
    pub phone: String,
    pub greeting: String,
    pub currency_symbol: String,
}

impl PurchaseLink {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            greeting: DEFAULT_GREETING.to_string(),
            currency_symbol: "$".to_string(),
        }
    }

    /// 送信するメッセージ本文
    pub fn message(&self, product: &Product) -> String {
        format!(
            "{} {} ({}{})",
            self.greeting,
            product.name,
            self.currency_symbol,
            product.price.display()
        )
    }

    /// 商品ごとのディープリンクURL
    pub fn url_for(&self, product: &Product) -> String {
        format!(
            "{}/{}?text={}",
            MESSAGING_BASE_URL,
            self.phone,
            url_encode(&self.message(product))
        )
    }
}
