//! Result rows for the live search dropdown.

use serde::Serialize;
use storefront_commerce::catalog::{PriceDisplay, PriceSummary, Product};
use storefront_core::ImageConfig;
use storefront_security::{escape_html, highlight_match, SafeHtml};

/// One product in the results list, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// Product page link.
    pub href: String,
    /// Full image URL.
    pub image_url: String,
    /// Highlighted, sanitized product name.
    pub name: SafeHtml,
    /// Price to show next to the name.
    pub price: PriceSummary,
}

impl ResultRow {
    /// Build a row for `product`, highlighting `term` in its name.
    pub fn from_product(product: &Product, term: &str, images: &ImageConfig) -> Self {
        Self {
            href: product.href(),
            image_url: images.product_image_url(&product.image),
            name: highlight_match(&product.name, term),
            price: PriceSummary::of(product),
        }
    }

    /// Suggestion anchor markup.
    pub fn to_html(&self) -> String {
        format!(
            r#"<a class="autocomplete-suggestion" href="{href}"><img src="{image}" width="40" height="40" alt="product"><div class="search-name">{name}</div><span class="search-price">{price}</span></a>"#,
            href = escape_html(&self.href),
            image = escape_html(&self.image_url),
            name = self.name,
            price = price_markup(&self.price),
        )
    }
}

/// Price markup: struck-through base price next to the discounted price, or
/// the base price alone.
pub fn price_markup(summary: &PriceSummary) -> String {
    match summary.display() {
        PriceDisplay::Discounted { was, now } => format!(
            r#"<del class="old-price">{}</del><ins class="new-price">{}</ins>"#,
            was.display(),
            now.display()
        ),
        PriceDisplay::Regular { price } => {
            format!(r#"<ins class="new-price">{}</ins>"#, price.display())
        }
    }
}

/// Results list markup. Empty when there are no rows.
pub fn render_results(rows: &[ResultRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let items: String = rows.iter().map(ResultRow::to_html).collect();
    format!(r#"<div class="live-search-list bg-grey-light scrollable">{items}</div>"#)
}
