//! 検索・カテゴリフィルタ
//!
//! (FilterState, 商品リスト) → 表示対象 の純粋関数。
//! 状態はイベントごとに丸ごと置き換える（部分的に書き換えない）。
//!
//! 検索は部分一致、カテゴリはトークンの完全一致。この非対称性は意図的。

use crate::types::{category_token, search_key, Product};

/// 「すべて」ボタンのトークン
///
/// カテゴリ一覧に空文字列は入らないので、実在のカテゴリ（"All" など）と衝突しない。
pub const ALL_TOKEN: &str = "";

/// フィルタ判定に使うキー
///
/// いずれも小文字化・trim 済みであること。
pub trait FilterKeys {
    fn name_key(&self) -> &str;
    fn description_key(&self) -> &str;
    fn category_token(&self) -> &str;
}

impl FilterKeys for Product {
    fn name_key(&self) -> &str {
        Product::name_key(self)
    }

    fn description_key(&self) -> &str {
        Product::description_key(self)
    }

    fn category_token(&self) -> &str {
        Product::category_token(self)
    }
}

/// 選択中のカテゴリ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveCategory {
    /// 制限なし
    #[default]
    All,
    /// 正規化済みトークン（空文字列にはならない）
    Token(String),
}

impl ActiveCategory {
    /// トークン文字列から生成（空文字列のみ All）
    pub fn from_token(token: &str) -> Self {
        let token = category_token(token);
        if token == ALL_TOKEN {
            ActiveCategory::All
        } else {
            ActiveCategory::Token(token)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ActiveCategory::All)
    }

    pub fn as_token(&self) -> &str {
        match self {
            ActiveCategory::All => ALL_TOKEN,
            ActiveCategory::Token(t) => t,
        }
    }

    pub fn matches(&self, category_token: &str) -> bool {
        match self {
            ActiveCategory::All => true,
            ActiveCategory::Token(t) => t == category_token,
        }
    }
}

/// フィルタ状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    active_category: ActiveCategory,
}

impl FilterState {
    /// 初期状態: 検索語なし・すべて
    pub fn new() -> Self {
        Self::default()
    }

    /// 検索語を差し替えた新しい状態
    pub fn with_search(self, raw: &str) -> Self {
        Self {
            search_term: search_key(raw),
            ..self
        }
    }

    /// カテゴリを差し替えた新しい状態
    pub fn with_category(self, active_category: ActiveCategory) -> Self {
        Self {
            active_category,
            ..self
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_category(&self) -> &ActiveCategory {
        &self.active_category
    }

    pub fn matches_search<T: FilterKeys + ?Sized>(&self, item: &T) -> bool {
        self.search_term.is_empty()
            || item.name_key().contains(&self.search_term)
            || item.description_key().contains(&self.search_term)
    }

    pub fn matches_category<T: FilterKeys + ?Sized>(&self, item: &T) -> bool {
        self.active_category.matches(item.category_token())
    }

    /// 表示対象かどうか
    pub fn matches<T: FilterKeys + ?Sized>(&self, item: &T) -> bool {
        self.matches_search(item) && self.matches_category(item)
    }
}

/// フィルタ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// 各商品の表示フラグ（元のリストと同じ順序・同じ長さ）
    visible: Vec<bool>,
    count: usize,
}

impl FilterOutcome {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &[bool] {
        &self.visible
    }

    /// 表示対象のインデックス
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 「該当なし」表示が必要か
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// 全件に対して1パスでフィルタを適用
pub fn apply_filter<T: FilterKeys>(state: &FilterState, items: &[T]) -> FilterOutcome {
    let visible: Vec<bool> = items.iter().map(|item| state.matches(item)).collect();
    let count = visible.iter().filter(|&&v| v).count();
    FilterOutcome { visible, count }
}
