//! カタログ読み込みモジュール
//!
//! 商品リストのJSONを検証し、正規化済みの商品とカテゴリ一覧を生成する。
//! 構造が不正な場合は部分的なカタログを返さず、エラーで中断する。

use crate::error::{Error, Result};
use crate::types::{category_token, Product, RawProduct, DEFAULT_NAME_PLACEHOLDER};
use serde::Deserialize;
use std::collections::BTreeSet;

/// カテゴリ（表示ラベル + 比較用トークン）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// trim 済み・大文字小文字はそのまま
    pub label: String,
    /// 小文字化したトークン（フィルタの比較キー）
    pub token: String,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            token: category_token(&label),
            label,
        }
    }
}

/// 読み込みオプション
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// 名前が無い商品に使う表示名
    pub name_placeholder: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            name_placeholder: DEFAULT_NAME_PLACEHOLDER.to_string(),
        }
    }
}

/// 読み込み済みカタログ
///
/// 読み込み後は読み取り専用。商品の識別はリスト上の位置で行う。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// 商品リストから生成（カテゴリ一覧を導出）
    pub fn new(products: Vec<Product>) -> Self {
        let categories = extract_categories(&products)
            .into_iter()
            .map(Category::new)
            .collect();
        Self {
            products,
            categories,
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(json, &LoadOptions::default())
    }

    /// JSON文字列から読み込み（オプション指定）
    pub fn from_json_with(json: &str, options: &LoadOptions) -> Result<Self> {
        let root: serde_json::Value = serde_json::from_str(json)?;

        let records = match root {
            serde_json::Value::Array(records) => records,
            other => {
                return Err(Error::InvalidCatalog(format!(
                    "root must be a list of products, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if !record.is_object() {
                return Err(Error::invalid_record(
                    index,
                    format!("expected an object, found {}", json_kind(&record)),
                ));
            }
            let raw = RawProduct::deserialize(record)
                .map_err(|e| Error::invalid_record(index, e))?;
            let product = Product::from_raw(raw, &options.name_placeholder)
                .map_err(|e| Error::invalid_record(index, e))?;
            products.push(product);
        }

        let catalog = Self::new(products);
        tracing::debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        Self::from_file_with(path, &LoadOptions::default())
    }

    /// JSONファイルから読み込み（非WASM環境のみ・オプション指定）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file_with(path: &std::path::Path, options: &LoadOptions) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_with(&content, options)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 昇順ソート済みのカテゴリ一覧
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// 商品からカテゴリ一覧を抽出
///
/// trim → 空文字を除外 → 完全一致で重複排除 → 昇順ソート
pub fn extract_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn product(name: &str, category: &str) -> Product {
        Product::new(name, Price::ZERO, None, "", category)
    }

    #[test]
    fn test_load_basic_catalog() {
        let json = r#"[
            {"name": "Red Shirt", "category": "Clothing", "price": 10},
            {"name": "Blue Mug", "category": "Home", "price": 5}
        ]"#;

        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "Red Shirt");
        assert_eq!(catalog.products()[1].price.cents(), 500);

        let labels: Vec<_> = catalog.categories().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Clothing", "Home"]);
        let tokens: Vec<_> = catalog.categories().iter().map(|c| c.token.as_str()).collect();
        assert_eq!(tokens, vec!["clothing", "home"]);
    }

    #[test]
    fn test_load_empty_list() {
        let catalog = Catalog::from_json("[]").expect("読み込み失敗");
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_error() {
        let result = Catalog::from_json("[{\"name\": ");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_non_list_root_is_error() {
        let result = Catalog::from_json(r#"{"name": "Red Shirt"}"#);
        match result {
            Err(Error::InvalidCatalog(msg)) => assert!(msg.contains("an object")),
            other => panic!("InvalidCatalog を期待: {:?}", other),
        }
    }

    #[test]
    fn test_load_non_object_record_is_error() {
        let result = Catalog::from_json(r#"[{"name": "ok"}, 42]"#);
        match result {
            Err(Error::InvalidCatalog(msg)) => assert!(msg.contains("record #1")),
            other => panic!("InvalidCatalog を期待: {:?}", other),
        }
    }

    #[test]
    fn test_load_wrong_field_type_is_error() {
        let result = Catalog::from_json(r#"[{"name": ["a", "b"]}]"#);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_load_negative_price_is_error() {
        let result = Catalog::from_json(r#"[{"name": "x", "price": -2}]"#);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_load_huge_price_is_error() {
        match Catalog::from_json(r#"[{"name": "a", "price": 5}, {"name": "b", "price": 1e20}]"#) {
            Err(Error::InvalidCatalog(msg)) => {
                assert!(msg.contains("record #1"), "{}", msg);
                assert!(msg.contains("too large"), "{}", msg);
            }
            other => panic!("InvalidCatalog を期待: {:?}", other),
        }
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let catalog = Catalog::from_json("[{}]").expect("読み込み失敗");
        let p = &catalog.products()[0];
        assert_eq!(p.name, "Sin nombre");
        assert_eq!(p.price.cents(), 0);
        assert!(p.photo.is_none());
        assert_eq!(p.description, "");
        assert_eq!(p.category, "");
    }

    #[test]
    fn test_load_custom_placeholder() {
        let options = LoadOptions {
            name_placeholder: "no name".to_string(),
        };
        let catalog = Catalog::from_json_with("[{}]", &options).expect("読み込み失敗");
        assert_eq!(catalog.products()[0].name, "no name");
    }

    #[test]
    fn test_extract_categories_trims_dedupes_sorts() {
        let products = vec![
            product("a", " Toys "),
            product("b", "Home"),
            product("c", "Toys"),
            product("d", ""),
            product("e", "   "),
            product("f", "Books"),
        ];
        assert_eq!(extract_categories(&products), vec!["Books", "Home", "Toys"]);
    }

    #[test]
    fn test_extract_categories_is_case_sensitive() {
        let products = vec![product("a", "home"), product("b", "Home")];
        assert_eq!(extract_categories(&products), vec!["Home", "home"]);
    }

    #[test]
    fn test_empty_category_not_in_set() {
        let catalog = Catalog::from_json(r#"[{"name": "x", "category": ""}]"#).unwrap();
        assert!(catalog.categories().is_empty());
    }
}
