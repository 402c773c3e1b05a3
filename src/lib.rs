//! shop-catalog
//!
//! 商品JSONから静的カタログページを生成するCLIのライブラリ部分

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;

use error::{CatalogError, Result};
use shop_catalog_common::{Catalog, LoadOptions};
use std::path::Path;

/// カタログファイルを読み込む
///
/// 読み込みに失敗した場合は部分的なカタログを返さない。
pub fn load_catalog(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    if !path.is_file() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }
    Ok(Catalog::from_file_with(path, options)?)
}
