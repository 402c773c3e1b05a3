//! フィルタビュー
//!
//! 入力イベント・カテゴリボタンのクリックごとに FilterState を丸ごと置き換え、
//! 全商品を1パスで判定して表示/非表示・件数・「該当なし」表示を更新する。
//! 要素は非表示にするだけで削除・並べ替えはしない。

use crate::dom::{self, DomItem};
use gloo::events::EventListener;
use shop_catalog_common::{apply_filter, CategorySelector, FilterOutcome, FilterState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub struct FilterView {
    items: Vec<DomItem>,
    buttons: Vec<HtmlElement>,
    selector: CategorySelector,
    state: FilterState,
    count: Option<Element>,
    empty_state: Option<HtmlElement>,
}

impl FilterView {
    /// 描画済みの文書から構築
    pub fn from_document(document: &Document) -> Result<Self, String> {
        let items: Vec<DomItem> = dom::query_all(document, dom::ITEM_SELECTOR)?
            .into_iter()
            .map(DomItem::read)
            .collect();

        let buttons = dom::query_all(document, dom::BUTTON_SELECTOR)?;
        let selector = CategorySelector::from_tokens(
            buttons
                .iter()
                .map(|b| b.get_attribute("data-category").unwrap_or_default()),
        );

        let mut view = Self {
            items,
            buttons,
            state: FilterState::new().with_category(selector.active_category()),
            selector,
            count: document.get_element_by_id(dom::COUNT_ID),
            empty_state: dom::by_id::<HtmlElement>(document, dom::EMPTY_STATE_ID),
        };
        view.paint_buttons();
        Ok(view)
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    /// 検索欄の入力（デバウンスなし）
    pub fn on_search(&mut self, raw: &str) -> FilterOutcome {
        self.state = self.state.clone().with_search(raw);
        self.refresh()
    }

    /// カテゴリボタンのクリック
    pub fn on_category(&mut self, index: usize) -> FilterOutcome {
        if self.selector.select(index) {
            self.paint_buttons();
            self.state = self
                .state
                .clone()
                .with_category(self.selector.active_category());
        }
        self.refresh()
    }

    /// 現在の状態で全件を再判定して描画
    pub fn refresh(&self) -> FilterOutcome {
        let outcome = apply_filter(&self.state, &self.items);

        for (item, &visible) in self.items.iter().zip(outcome.flags()) {
            let style = item.element.style();
            let _ = if visible {
                style.remove_property("display").map(|_| ())
            } else {
                style.set_property("display", "none")
            };
        }

        if let Some(count) = &self.count {
            count.set_text_content(Some(&outcome.count().to_string()));
        }

        if let Some(empty_state) = &self.empty_state {
            let display = if outcome.is_empty() { "block" } else { "none" };
            let _ = empty_state.style().set_property("display", display);
        }

        outcome
    }

    /// アクティブなボタンは常に1つだけ
    fn paint_buttons(&self) {
        for (index, button) in self.buttons.iter().enumerate() {
            let _ = button
                .class_list()
                .toggle_with_force("active", self.selector.is_active(index));
        }
    }
}

/// 文書にフィルタビューを取り付ける
///
/// 検索欄が無い場合はエラー。件数表示・「該当なし」表示は任意。
pub fn attach(document: &Document) -> Result<Rc<RefCell<FilterView>>, String> {
    let input = dom::by_id::<HtmlInputElement>(document, dom::SEARCH_INPUT_ID)
        .ok_or_else(|| format!("検索欄 #{} が見つかりません", dom::SEARCH_INPUT_ID))?;

    let view = Rc::new(RefCell::new(FilterView::from_document(document)?));

    {
        let view = Rc::clone(&view);
        let source = input.clone();
        EventListener::new(&input, "input", move |_| {
            view.borrow_mut().on_search(&source.value());
        })
        .forget();
    }

    let buttons = view.borrow().buttons.clone();
    for (index, button) in buttons.iter().enumerate() {
        let view = Rc::clone(&view);
        EventListener::new(button, "click", move |_| {
            view.borrow_mut().on_category(index);
        })
        .forget();
    }

    // 初期表示（検索欄に値が残っている場合も反映）
    let initial = view.borrow_mut().on_search(&input.value());
    gloo::console::debug!(format!(
        "catalog filter attached: {} items, {} visible",
        view.borrow().items.len(),
        initial.count()
    ));

    Ok(view)
}
