use crate::error::{CatalogError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shop_catalog_common::purchase::DEFAULT_GREETING;
use shop_catalog_common::types::{DEFAULT_NAME_PLACEHOLDER, DEFAULT_UNCATEGORIZED_LABEL};
use shop_catalog_common::{LoadOptions, PurchaseLink};
use std::path::PathBuf;

/// 電話番号の環境変数（設定ファイルより優先）
pub const PHONE_ENV: &str = "SHOP_CATALOG_PHONE";

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{6,15}$").unwrap();
}

/// ストア設定
///
/// 表示文言はすべてここで差し替えられる（デフォルトはスペイン語）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shop_name: String,
    pub tagline: String,
    /// 購入リンクの送信先（国番号込みの数字のみ）
    pub phone: Option<String>,
    pub greeting: String,
    pub currency_symbol: String,
    /// 商品画像のディレクトリ（ページからの相対パス）
    pub image_dir: String,
    pub stylesheet: String,
    /// フィルタ用WASMモジュールのJSローダ
    pub wasm_module: String,
    pub page_title: String,
    pub lang: String,
    pub search_placeholder: String,
    pub all_label: String,
    pub counter_label: String,
    pub empty_message: String,
    pub buy_label: String,
    pub footer_note: String,
    pub name_placeholder: String,
    pub uncategorized_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("shop-catalog").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            shop_name: "Mi Tienda Online".into(),
            tagline: "Productos de calidad al mejor precio".into(),
            phone: None,
            greeting: DEFAULT_GREETING.into(),
            currency_symbol: "$".into(),
            image_dir: "img".into(),
            stylesheet: "css/style.css".into(),
            wasm_module: "pkg/shop_catalog_wasm.js".into(),
            page_title: "Catálogo de Productos".into(),
            lang: "es".into(),
            search_placeholder: "Buscar por nombre o descripción...".into(),
            all_label: "Todas".into(),
            counter_label: "Productos encontrados:".into(),
            empty_message: "No se encontraron productos que coincidan con tu búsqueda o categoría."
                .into(),
            buy_label: "Comprar por WhatsApp".into(),
            footer_note: "Todos los derechos reservados.".into(),
            name_placeholder: DEFAULT_NAME_PLACEHOLDER.into(),
            uncategorized_label: DEFAULT_UNCATEGORIZED_LABEL.into(),
        }
    }

    /// 電話番号を取得（環境変数を優先）。未設定ならエラー。
    pub fn get_phone(&self) -> Result<String> {
        self.resolve_phone(std::env::var(PHONE_ENV).ok())?
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "電話番号が設定されていません。`shop-catalog config --set-phone NUMBER` または {} で設定してください",
                    PHONE_ENV
                ))
            })
    }

    /// 環境変数の値 → 設定ファイルの順に解決して検証
    ///
    /// 空の環境変数は未設定扱い。環境変数が不正な場合は設定ファイルに戻らずエラー。
    fn resolve_phone(&self, env_value: Option<String>) -> Result<Option<String>> {
        let raw = env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.phone.clone());
        raw.map(|phone| validate_phone(&phone)).transpose()
    }

    pub fn set_phone(&mut self, phone: &str) -> Result<()> {
        self.phone = Some(validate_phone(phone)?);
        self.save()
    }

    pub fn set_shop_name(&mut self, name: String) -> Result<()> {
        self.shop_name = name;
        self.save()
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            name_placeholder: self.name_placeholder.clone(),
        }
    }

    /// 購入リンクを組み立てる。電話番号が無ければ None。
    pub fn purchase_link(&self) -> Result<Option<PurchaseLink>> {
        let phone = self.resolve_phone(std::env::var(PHONE_ENV).ok())?;
        Ok(phone.map(|phone| PurchaseLink {
            phone,
            greeting: self.greeting.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }))
    }
}

/// `+`・空白・ハイフンを除去して数字のみか検証
pub fn validate_phone(raw: &str) -> Result<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '+' | ' ' | '-' | '(' | ')'))
        .collect();
    if PHONE_RE.is_match(&digits) {
        Ok(digits)
    } else {
        Err(CatalogError::InvalidPhone(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    lazy_static! {
        // 環境変数はプロセス共有なので、書き換えるテストは直列化する
        static ref ENV_LOCK: Mutex<()> = Mutex::new(());
    }

    fn with_phone(phone: Option<&str>) -> Config {
        Config {
            phone: phone.map(str::to_string),
            ..Config::default()
        }
    }

    #[test]
    fn test_validate_phone_strips_formatting() {
        assert_eq!(validate_phone("+53 5534-8649").unwrap(), "5355348649");
        assert_eq!(validate_phone("5355348649").unwrap(), "5355348649");
    }

    #[test]
    fn test_validate_phone_rejects_garbage() {
        assert!(matches!(validate_phone("abc"), Err(CatalogError::InvalidPhone(_))));
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.image_dir, "img");
        assert_eq!(config.all_label, "Todas");
        assert!(config.phone.is_none());
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"shop_name": "Tienda Luz", "phone": "34600111222"}"#).unwrap();
        assert_eq!(config.shop_name, "Tienda Luz");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.load_options().name_placeholder, "Sin nombre");
    }

    #[test]
    fn test_env_phone_overrides_config() {
        let config = with_phone(Some("34600111222"));
        let resolved = config.resolve_phone(Some("+53 5534-8649".to_string())).unwrap();
        assert_eq!(resolved.as_deref(), Some("5355348649"));
    }

    #[test]
    fn test_invalid_env_phone_is_error_even_with_config() {
        let config = with_phone(Some("34600111222"));
        assert!(matches!(
            config.resolve_phone(Some("not-a-phone".to_string())),
            Err(CatalogError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_empty_env_phone_falls_back_to_config() {
        let config = with_phone(Some("34600111222"));
        let resolved = config.resolve_phone(Some("  ".to_string())).unwrap();
        assert_eq!(resolved.as_deref(), Some("34600111222"));
    }

    #[test]
    fn test_no_phone_anywhere() {
        let config = with_phone(None);
        assert_eq!(config.resolve_phone(None).unwrap(), None);
    }

    #[test]
    fn test_phone_env_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = std::env::var(PHONE_ENV).ok();

        std::env::set_var(PHONE_ENV, "5355348649");
        let config = with_phone(Some("34600111222"));
        assert_eq!(config.get_phone().unwrap(), "5355348649");
        assert_eq!(config.purchase_link().unwrap().unwrap().phone, "5355348649");

        std::env::set_var(PHONE_ENV, "abc");
        assert!(matches!(config.get_phone(), Err(CatalogError::InvalidPhone(_))));
        assert!(matches!(config.purchase_link(), Err(CatalogError::InvalidPhone(_))));

        std::env::remove_var(PHONE_ENV);
        let empty = with_phone(None);
        assert!(matches!(empty.get_phone(), Err(CatalogError::Config(_))));
        assert!(empty.purchase_link().unwrap().is_none());
        assert_eq!(config.get_phone().unwrap(), "34600111222");

        match previous {
            Some(value) => std::env::set_var(PHONE_ENV, value),
            None => std::env::remove_var(PHONE_ENV),
        }
    }
}
