//! Shop Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型・読み込み・フィルタ処理

pub mod types;
pub mod format;
pub mod error;
pub mod catalog;
pub mod filter;
pub mod selector;
pub mod purchase;

pub use types::{Price, Product, RawPrice, RawProduct};
pub use format::{capitalize_first, escape_html, format_price, url_encode};
pub use error::{Error, Result};
pub use catalog::{extract_categories, Catalog, Category, LoadOptions};
pub use filter::{apply_filter, ActiveCategory, FilterKeys, FilterOutcome, FilterState, ALL_TOKEN};
pub use selector::{CategoryOption, CategorySelector};
pub use purchase::PurchaseLink;
