use anyhow::Context;
use clap::Parser;
use shop_catalog::{assets, cli, config, load_catalog, preview, render};
use cli::{Cli, Commands};
use config::{Config, PHONE_ENV};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shop_catalog=debug,shop_catalog_common=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Render { input, output, title, assets: assets_dir } => {
            println!("🛍  shop-catalog - カタログ生成\n");

            // 1. 読み込み
            println!("[1/3] カタログを読み込み中...");
            let catalog = load_catalog(&input, &config.load_options())
                .with_context(|| format!("カタログを読み込めません: {}", input.display()))?;
            println!(
                "✔ {}件の商品 / {}カテゴリ\n",
                catalog.len(),
                catalog.categories().len()
            );

            // 2. ページ生成
            println!("[2/3] ページを生成中...");
            let purchase = config.purchase_link()?;
            if purchase.is_none() {
                tracing::warn!(
                    env = PHONE_ENV,
                    "電話番号が未設定のため購入ボタンなしで生成します"
                );
            }
            let options = render::PageOptions::new(config.clone(), purchase).with_title(title);
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let page_path = render::write_page(&catalog, &options, &output)?;
            println!("✔ ページ出力: {}\n", page_path.display());

            // 3. アセット
            let site_root = page_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            if let Some(assets_dir) = assets_dir {
                println!("[3/3] アセットをコピー中...");
                let copied = assets::copy_assets(&assets_dir, &site_root)?;
                println!("✔ {}ファイルをコピー\n", copied);
            } else {
                println!("[3/3] アセットのコピーをスキップ\n");
            }

            let image_root = site_root.join(&config.image_dir);
            for missing in assets::missing_photos(&catalog, &image_root) {
                tracing::warn!(
                    index = missing.index,
                    product = %missing.name,
                    path = %missing.path.display(),
                    "商品画像が見つかりません"
                );
            }

            println!("✅ 生成完了");
        }

        Commands::List { input, search, category } => {
            let catalog = load_catalog(&input, &config.load_options())
                .with_context(|| format!("カタログを読み込めません: {}", input.display()))?;
            let outcome = preview::filter_catalog(&catalog, search.as_deref(), category.as_deref());
            print!("{}", preview::format_listing(&catalog, &outcome, &config));
        }

        Commands::Categories { input } => {
            let catalog = load_catalog(&input, &config.load_options())
                .with_context(|| format!("カタログを読み込めません: {}", input.display()))?;
            if catalog.categories().is_empty() {
                println!("カテゴリはありません");
            } else {
                println!("カテゴリ:");
                print!("{}", preview::format_categories(&catalog));
            }
        }

        Commands::Config { set_phone, set_name, show } => {
            let mut config = config;

            if let Some(phone) = set_phone {
                config.set_phone(&phone)?;
                println!("✔ 電話番号を設定しました");
            }

            if let Some(name) = set_name {
                config.set_shop_name(name)?;
                println!("✔ 店舗名を設定しました");
            }

            if show {
                println!("設定:");
                println!("  店舗名: {}", config.shop_name);
                println!("  電話番号: {}", config.phone.as_deref().unwrap_or("未設定"));
                println!("  通貨記号: {}", config.currency_symbol);
                println!("  画像ディレクトリ: {}", config.image_dir);
                println!("  スタイルシート: {}", config.stylesheet);
                println!("  WASMモジュール: {}", config.wasm_module);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
