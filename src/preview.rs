//! ターミナルでのフィルタ結果プレビュー
//!
//! ブラウザと同じ判定ロジックで絞り込み、結果を一覧表示する。

use crate::config::Config;
use shop_catalog_common::{apply_filter, ActiveCategory, Catalog, FilterOutcome, FilterState};

/// 検索語とカテゴリから状態を組み立てて絞り込む
pub fn filter_catalog(catalog: &Catalog, search: Option<&str>, category: Option<&str>) -> FilterOutcome {
    let state = FilterState::new()
        .with_search(search.unwrap_or(""))
        .with_category(ActiveCategory::from_token(category.unwrap_or("")));
    apply_filter(&state, catalog.products())
}

/// 一覧テキストを生成
pub fn format_listing(catalog: &Catalog, outcome: &FilterOutcome, config: &Config) -> String {
    let mut out = String::new();

    for index in outcome.visible_indices() {
        let product = &catalog.products()[index];
        out.push_str(&format!(
            "  {:>3}. {} — {}{} — {}\n",
            index + 1,
            product.name,
            config.currency_symbol,
            product.price.display(),
            product.category_label(&config.uncategorized_label)
        ));
    }

    if outcome.is_empty() {
        out.push_str(&config.empty_message);
        out.push('\n');
    }
    out.push_str(&format!("{} {}\n", config.counter_label, outcome.count()));
    out
}

/// カテゴリ一覧テキストを生成
pub fn format_categories(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let count = catalog
            .products()
            .iter()
            .filter(|p| p.category == category.label)
            .count();
        out.push_str(&format!("  {} [{}] ({})\n", category.label, category.token, count));
    }
    out
}
