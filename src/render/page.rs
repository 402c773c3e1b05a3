//! カタログページ（HTML）の生成
//!
//! 各商品ブロックに小文字化・trim 済みの data 属性（name / description / category）を付け、
//! ブラウザ側のフィルタ（WASM）がそれを読んで表示を切り替える。

use crate::config::Config;
use chrono::Datelike;
use shop_catalog_common::{
    apply_filter, escape_html, Catalog, CategorySelector, FilterState, Product, PurchaseLink,
};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// ページ生成オプション
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub config: Config,
    /// 電話番号が無い場合は None（購入ボタンを出さない）
    pub purchase: Option<PurchaseLink>,
    /// フッターの著作権表示の年
    pub year: i32,
}

impl PageOptions {
    pub fn new(config: Config, purchase: Option<PurchaseLink>) -> Self {
        Self {
            config,
            purchase,
            year: chrono::Local::now().year(),
        }
    }

    /// ページタイトルを上書き
    pub fn with_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.config.page_title = title;
        }
        self
    }

    fn image_src(&self, photo: &str) -> String {
        let dir = self.config.image_dir.trim_end_matches('/');
        if dir.is_empty() {
            photo.to_string()
        } else {
            format!("{}/{}", dir, photo)
        }
    }
}

/// HTMLページ全体を生成
pub fn render_page(catalog: &Catalog, options: &PageOptions) -> String {
    let config = &options.config;
    let initial = apply_filter(&FilterState::new(), catalog.products());

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&config.lang)));
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{}</title>\n", escape_html(&config.page_title)));
    html.push_str(&format!("    <link href=\"{}\" rel=\"stylesheet\">\n", BOOTSTRAP_CSS));
    html.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        escape_html(&config.stylesheet)
    ));
    html.push_str("</head>\n");
    html.push_str("<body>\n\n");

    // ヘッダー
    html.push_str("<header class=\"bg-primary text-white py-3\">\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str(&format!("        <h1 class=\"h3\">{}</h1>\n", escape_html(&config.shop_name)));
    html.push_str(&format!("        <p class=\"mb-0\">{}</p>\n", escape_html(&config.tagline)));
    html.push_str("    </div>\n");
    html.push_str("</header>\n\n");

    html.push_str("<main class=\"container mt-4 mb-5\">\n");

    // 検索欄
    html.push_str("    <div class=\"mb-4\">\n");
    html.push_str(&format!(
        "        <input type=\"text\" id=\"searchInput\" class=\"form-control\" placeholder=\"{}\">\n",
        escape_html(&config.search_placeholder)
    ));
    html.push_str("    </div>\n\n");

    if !catalog.categories().is_empty() {
        render_category_buttons(&mut html, catalog, config);
    }

    html.push_str("    <div id=\"productCounter\" class=\"mb-3 text-muted\">\n");
    html.push_str(&format!(
        "        {} <span id=\"count\">{}</span>\n",
        escape_html(&config.counter_label),
        initial.count()
    ));
    html.push_str("    </div>\n\n");

    html.push_str("    <div id=\"productContainer\" class=\"row\">\n");
    for product in catalog.products() {
        render_product(&mut html, product, options);
    }
    html.push_str("    </div>\n\n");

    html.push_str(&format!(
        "    <div id=\"noResults\" class=\"text-center text-muted py-4\" style=\"display: {};\">\n",
        if initial.is_empty() { "block" } else { "none" }
    ));
    html.push_str(&format!("        {}\n", escape_html(&config.empty_message)));
    html.push_str("    </div>\n");
    html.push_str("</main>\n\n");

    // フッター
    html.push_str("<footer class=\"bg-dark text-light text-center py-3 mt-auto\">\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str(&format!(
        "        <p class=\"mb-0\">&copy; {} {}. {}</p>\n",
        options.year,
        escape_html(&config.shop_name),
        escape_html(&config.footer_note)
    ));
    html.push_str("    </div>\n");
    html.push_str("</footer>\n\n");

    html.push_str("<script type=\"module\">\n");
    html.push_str(&format!(
        "    import init from './{}';\n",
        escape_html(config.wasm_module.trim_start_matches("./"))
    ));
    html.push_str("    init();\n");
    html.push_str("</script>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

fn render_category_buttons(html: &mut String, catalog: &Catalog, config: &Config) {
    let selector = CategorySelector::new(&config.all_label, catalog.categories());

    html.push_str("    <div class=\"mb-3\">\n");
    for (index, option) in selector.options().iter().enumerate() {
        let label = if index == 0 {
            option.label.clone()
        } else {
            shop_catalog_common::capitalize_first(&option.label)
        };
        html.push_str(&format!(
            "        <button class=\"btn btn-outline-secondary btn-sm me-2 category-filter{}\" data-category=\"{}\">{}</button>\n",
            if selector.is_active(index) { " active" } else { "" },
            escape_html(option.token()),
            escape_html(&label)
        ));
    }
    html.push_str("    </div>\n\n");
}

fn render_product(html: &mut String, product: &Product, options: &PageOptions) {
    let config = &options.config;
    let name = escape_html(&product.name);

    html.push_str(&format!(
        "        <div class=\"col-12 col-sm-6 col-md-4 col-lg-3 mb-4 product-item\" data-name=\"{}\" data-description=\"{}\" data-category=\"{}\">\n",
        escape_html(product.name_key()),
        escape_html(product.description_key()),
        escape_html(product.category_token())
    ));
    html.push_str("            <div class=\"card product-card h-100 shadow-sm\">\n");

    // 画像が無い商品はプレースホルダも出さない
    if let Some(photo) = &product.photo {
        html.push_str(&format!(
            "                <img src=\"{}\" class=\"card-img-top\" alt=\"{}\">\n",
            escape_html(&options.image_src(photo)),
            name
        ));
    }

    html.push_str("                <div class=\"card-body d-flex flex-column\">\n");
    html.push_str(&format!(
        "                    <small class=\"text-muted\">{}</small>\n",
        escape_html(&product.category_label(&config.uncategorized_label))
    ));
    html.push_str(&format!("                    <h6 class=\"card-title\">{}</h6>\n", name));
    html.push_str(&format!(
        "                    <p class=\"card-text\">{}</p>\n",
        escape_html(&product.description)
    ));
    html.push_str(&format!(
        "                    <p class=\"card-text mt-auto\"><strong>{}{}</strong></p>\n",
        escape_html(&config.currency_symbol),
        product.price.display()
    ));
    if let Some(purchase) = &options.purchase {
        html.push_str(&format!(
            "                    <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"btn btn-success btn-sm mt-2\">{}</a>\n",
            escape_html(&purchase.url_for(product)),
            escape_html(&config.buy_label)
        ));
    }
    html.push_str("                </div>\n");
    html.push_str("            </div>\n");
    html.push_str("        </div>\n");
}
