//! 描画済みマークアップの読み取り
//!
//! サーバー側で生成した data 属性を読み、フィルタ判定用のキーにする。

use shop_catalog_common::filter::FilterKeys;
use shop_catalog_common::types::{category_token, search_key};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const ITEM_SELECTOR: &str = ".product-item";
pub const BUTTON_SELECTOR: &str = ".category-filter";
pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const COUNT_ID: &str = "count";
pub const EMPTY_STATE_ID: &str = "noResults";

/// 商品ブロックの data 属性から得たキー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemKeys {
    name: String,
    description: String,
    category: String,
}

impl ItemKeys {
    /// 属性が無い場合は空文字列として扱う
    pub fn from_attributes(
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            name: search_key(&name.unwrap_or_default()),
            description: search_key(&description.unwrap_or_default()),
            category: category_token(&category.unwrap_or_default()),
        }
    }
}

impl FilterKeys for ItemKeys {
    fn name_key(&self) -> &str {
        &self.name
    }

    fn description_key(&self) -> &str {
        &self.description
    }

    fn category_token(&self) -> &str {
        &self.category
    }
}

/// 商品ブロック（DOM要素 + キー）
pub struct DomItem {
    pub element: HtmlElement,
    pub keys: ItemKeys,
}

impl DomItem {
    pub fn read(element: HtmlElement) -> Self {
        let keys = ItemKeys::from_attributes(
            element.get_attribute("data-name"),
            element.get_attribute("data-description"),
            element.get_attribute("data-category"),
        );
        Self { element, keys }
    }
}

impl FilterKeys for DomItem {
    fn name_key(&self) -> &str {
        self.keys.name_key()
    }

    fn description_key(&self) -> &str {
        self.keys.description_key()
    }

    fn category_token(&self) -> &str {
        self.keys.category_token()
    }
}

/// セレクタに一致する要素を文書順で取得
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, String> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| format!("セレクタが不正です {}: {:?}", selector, e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_keys_missing_attributes_are_empty() {
        let keys = ItemKeys::from_attributes(None, None, None);
        assert_eq!(keys.name_key(), "");
        assert_eq!(keys.description_key(), "");
        assert_eq!(keys.category_token(), "");
    }

    #[test]
    fn test_item_keys_are_normalized() {
        let keys = ItemKeys::from_attributes(
            Some(" Red Shirt ".to_string()),
            Some("COTTON".to_string()),
            Some("Clothing ".to_string()),
        );
        assert_eq!(keys.name_key(), "red shirt");
        assert_eq!(keys.description_key(), "cotton");
        assert_eq!(keys.category_token(), "clothing");
    }
}
