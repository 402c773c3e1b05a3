//! 商品データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - RawProduct: JSONから読み込んだままのレコード（全フィールド省略可）
//! - Product: デフォルト値適用・正規化済みの商品

use crate::format::{capitalize_first, format_cents};
use serde::Deserialize;

/// 名前が無い商品の表示名（デフォルト）
pub const DEFAULT_NAME_PLACEHOLDER: &str = "Sin nombre";

/// カテゴリ無し商品の表示ラベル（デフォルト）
pub const DEFAULT_UNCATEGORIZED_LABEL: &str = "Sin categoría";

/// JSONの1レコード
///
/// 英語名のほか、元の店舗データのスペイン語フィールド名も受け付ける。
/// `null` は未指定と同じ扱い。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    #[serde(alias = "nombre")]
    pub name: Option<String>,

    #[serde(alias = "precio")]
    pub price: Option<RawPrice>,

    #[serde(alias = "foto")]
    pub photo: Option<String>,

    #[serde(alias = "descripcion")]
    pub description: Option<String>,

    #[serde(alias = "categoria")]
    pub category: Option<String>,
}

/// 価格は数値でも数値文字列でもよい
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// 検証して `Price` に変換
    pub fn to_price(&self) -> std::result::Result<Price, String> {
        let value = match self {
            RawPrice::Number(n) => *n,
            RawPrice::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(Price::ZERO);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| format!("price is not a number: {:?}", s))?
            }
        };
        Price::from_decimal(value)
    }
}

/// 価格（セント単位で保持）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// 小数の価格から生成（小数第3位で四捨五入）
    pub fn from_decimal(value: f64) -> std::result::Result<Self, String> {
        if !value.is_finite() {
            return Err(format!("price is not finite: {}", value));
        }
        if value < 0.0 {
            return Err(format!("price is negative: {}", value));
        }
        let cents = (value * 100.0).round();
        // `as u64` は飽和するので、範囲外はここで弾く
        if cents >= u64::MAX as f64 {
            return Err(format!("price is too large: {}", value));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// 表示用文字列（例: `1.234,50`）
    pub fn display(&self) -> String {
        format_cents(self.cents)
    }
}

/// 正規化済みの商品
///
/// 読み込み時に一度だけデフォルト値と検索キーを確定させる。
/// 以降のコードはフィールドの欠落を再確認しない。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Price,
    /// 画像ディレクトリからの相対パス
    pub photo: Option<String>,
    pub description: String,
    /// 前後の空白を除いたカテゴリ（空文字列はカテゴリ無し）
    pub category: String,

    name_key: String,
    description_key: String,
    category_token: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: Price,
        photo: Option<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let description = description.into();
        let category = category.into().trim().to_string();
        let photo = photo
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Self {
            name_key: search_key(&name),
            description_key: search_key(&description),
            category_token: category_token(&category),
            name,
            price,
            photo,
            description,
            category,
        }
    }

    /// 生レコードから生成（欠落フィールドはデフォルト値）
    pub fn from_raw(raw: RawProduct, name_placeholder: &str) -> std::result::Result<Self, String> {
        let price = match &raw.price {
            Some(p) => p.to_price()?,
            None => Price::ZERO,
        };

        Ok(Self::new(
            raw.name.unwrap_or_else(|| name_placeholder.to_string()),
            price,
            raw.photo,
            raw.description.unwrap_or_default(),
            raw.category.unwrap_or_default(),
        ))
    }

    /// 小文字化した商品名（検索用）
    pub fn name_key(&self) -> &str {
        &self.name_key
    }

    /// 小文字化した説明（検索用）
    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    /// カテゴリトークン（カテゴリ無しは空文字列）
    pub fn category_token(&self) -> &str {
        &self.category_token
    }

    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }

    /// 表示用カテゴリラベル（先頭大文字）
    pub fn category_label(&self, uncategorized: &str) -> String {
        if self.has_category() {
            capitalize_first(&self.category)
        } else {
            uncategorized.to_string()
        }
    }
}

/// 検索キー: 小文字化 + trim
pub fn search_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// カテゴリトークン: 小文字化 + trim
pub fn category_token(value: &str) -> String {
    value.trim().to_lowercase()
}
