use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shop-catalog")]
#[command(about = "静的商品カタログ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品JSONからカタログページを生成
    Render {
        /// 商品JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル/ディレクトリ（デフォルト: カレントの index.html）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ページタイトル
        #[arg(short, long)]
        title: Option<String>,

        /// 出力先へコピーするアセットディレクトリ（css, img など）
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// 絞り込み結果をターミナルに表示
    List {
        /// 商品JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 検索語（名前・説明の部分一致）
        #[arg(short, long)]
        search: Option<String>,

        /// カテゴリ（完全一致、省略時はすべて）
        #[arg(short, long)]
        category: Option<String>,
    },

    /// カテゴリ一覧を表示
    Categories {
        /// 商品JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 購入リンクの電話番号を設定
        #[arg(long)]
        set_phone: Option<String>,

        /// 店舗名を設定
        #[arg(long)]
        set_name: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
