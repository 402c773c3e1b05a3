//! 静的アセット（CSS・商品画像）の扱い
//!
//! 画像は固定ディレクトリからの相対パスで解決する。
//! 画像ファイルが無いのはエラーではない（警告のみ）。

use crate::error::{CatalogError, Result};
use shop_catalog_common::Catalog;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 画像ファイルが見つからない商品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPhoto {
    /// カタログ上の位置
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
}

/// アセットディレクトリを出力先へコピー（相対パスを維持）
///
/// コピーしたファイル数を返す。
pub fn copy_assets(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Err(CatalogError::FolderNotFound(source.display().to_string()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let relative = match path.strip_prefix(source) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(path, &target)?;
            copied += 1;
        }
    }

    tracing::debug!(source = %source.display(), dest = %dest.display(), copied, "assets copied");
    Ok(copied)
}

/// 画像ディレクトリに存在しない商品画像を列挙
pub fn missing_photos(catalog: &Catalog, image_root: &Path) -> Vec<MissingPhoto> {
    catalog
        .products()
        .iter()
        .enumerate()
        .filter_map(|(index, product)| {
            let photo = product.photo.as_ref()?;
            let path = image_root.join(photo);
            if path.is_file() {
                None
            } else {
                Some(MissingPhoto {
                    index,
                    name: product.name.clone(),
                    path,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_assets_preserves_layout() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::create_dir_all(src.path().join("css")).unwrap();
        fs::create_dir_all(src.path().join("img/sub")).unwrap();
        fs::write(src.path().join("css/style.css"), "body{}").unwrap();
        fs::write(src.path().join("img/a.jpg"), b"jpg").unwrap();
        fs::write(src.path().join("img/sub/b.png"), b"png").unwrap();

        let copied = copy_assets(src.path(), dst.path()).unwrap();
        assert_eq!(copied, 3);
        assert!(dst.path().join("css/style.css").is_file());
        assert!(dst.path().join("img/sub/b.png").is_file());
    }

    #[test]
    fn test_copy_assets_missing_source() {
        let dst = tempdir().unwrap();
        let result = copy_assets(Path::new("/nonexistent/assets/12345"), dst.path());
        assert!(matches!(result, Err(CatalogError::FolderNotFound(_))));
    }

    #[test]
    fn test_missing_photos() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("here.jpg"), b"jpg").unwrap();

        let catalog = Catalog::from_json(
            r#"[
                {"name": "A", "photo": "here.jpg"},
                {"name": "B", "photo": "gone.jpg"},
                {"name": "C"}
            ]"#,
        )
        .unwrap();

        let missing = missing_photos(&catalog, dir.path());
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].index, 1);
        assert_eq!(missing[0].name, "B");
        assert!(missing[0].path.ends_with("gone.jpg"));
    }
}
