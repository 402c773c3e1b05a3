//! カテゴリ選択ボタン列の状態
//!
//! 選択肢は「すべて」+ カテゴリ一覧。選択中はインデックス1つだけで表すため、
//! 同時に複数がアクティブになることはない。

use crate::catalog::Category;
use crate::filter::ActiveCategory;

/// ボタン1つ分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub label: String,
    /// 押下時に有効になるカテゴリ（「すべて」ボタンのみ All）
    pub category: ActiveCategory,
}

impl CategoryOption {
    /// マークアップの `data-category` に出す値（「すべて」は空文字列）
    pub fn token(&self) -> &str {
        self.category.as_token()
    }
}

/// カテゴリ選択の状態機械
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    options: Vec<CategoryOption>,
    active: usize,
}

impl CategorySelector {
    /// 先頭に「すべて」を置いて生成。初期状態は「すべて」。
    pub fn new(all_label: &str, categories: &[Category]) -> Self {
        let mut options = Vec::with_capacity(categories.len() + 1);
        options.push(CategoryOption {
            label: all_label.to_string(),
            category: ActiveCategory::All,
        });
        // カテゴリ名が "All" でも Token のまま（All に戻さない）
        options.extend(categories.iter().map(|c| CategoryOption {
            label: c.label.clone(),
            category: ActiveCategory::Token(c.token.clone()),
        }));
        Self { options, active: 0 }
    }

    /// 描画済みボタンのトークン列から生成
    ///
    /// 空のトークンが「すべて」ボタン。無ければ先頭を初期選択にする。
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options: Vec<CategoryOption> = tokens
            .into_iter()
            .map(|t| CategoryOption {
                label: t.as_ref().to_string(),
                category: ActiveCategory::from_token(t.as_ref()),
            })
            .collect();
        let active = options
            .iter()
            .position(|o| o.category.is_all())
            .unwrap_or(0);
        Self { options, active }
    }

    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// ボタン押下。範囲外なら何もしない。
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// トークン指定で選択（最初に一致したボタン）
    pub fn select_token(&mut self, token: &str) -> bool {
        let wanted = ActiveCategory::from_token(token);
        match self.options.iter().position(|o| o.category == wanted) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// 現在の選択をフィルタ用の値に変換
    pub fn active_category(&self) -> ActiveCategory {
        self.options
            .get(self.active)
            .map(|o| o.category.clone())
            .unwrap_or_default()
    }
}
