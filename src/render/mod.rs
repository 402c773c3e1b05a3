pub mod page;

pub use page::{render_page, PageOptions};

use crate::error::Result;
use shop_catalog_common::Catalog;
use std::path::{Path, PathBuf};

const PAGE_FILE_NAME: &str = "index.html";

/// 出力先が `.html` / `.htm` のファイルでなければディレクトリとみなし `index.html` を付ける
///
/// `site.v2` のようにドットを含むディレクトリ名もディレクトリ扱い。
pub fn page_output_path(output: &Path) -> PathBuf {
    if output.is_dir() || !is_html_file(output) {
        output.join(PAGE_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// ページを生成してファイルに書き込む
pub fn write_page(catalog: &Catalog, options: &PageOptions, output: &Path) -> Result<PathBuf> {
    let page_path = page_output_path(output);

    if let Some(parent) = page_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&page_path, render_page(catalog, options))?;
    tracing::debug!(
        path = %page_path.display(),
        products = catalog.len(),
        "page written"
    );
    Ok(page_path)
}
