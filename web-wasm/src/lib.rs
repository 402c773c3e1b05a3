//! Shop Catalog Filter View (WASM)
//!
//! サーバー側で生成したカタログページに取り付け、検索・カテゴリ絞り込みを行う。

pub mod dom;
pub mod view;

pub use view::{attach, FilterView};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // 取り付けに失敗しても静的ページはそのまま使える
    if let Err(e) = attach(&gloo::utils::document()) {
        gloo::console::error!(format!("catalog filter disabled: {}", e));
    }
}
