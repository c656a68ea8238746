//! Wishlist table markup.

use storefront_security::escape_html;

use crate::wishlist::{CartAction, Wishlist, WishlistItem, WishlistPrice};

pub const EMPTY_WISHLIST_MESSAGE: &str = "No products added to the wishlist.";

/// Render the wishlist table, or the empty state.
///
/// `image_url` maps an item's image path to a full URL.
pub fn render_wishlist(wishlist: &Wishlist, image_url: impl Fn(&str) -> String) -> String {
    if wishlist.is_empty() {
        return format!(
            r#"<div class="empty-cart text-center"><i class="cart-empty d-icon-heart"></i><p>{}</p><p class="return-to-shop mb-0"><a class="button wc-backward btn btn-dark btn-md" href="/shop">Return to shop</a></p></div>"#,
            EMPTY_WISHLIST_MESSAGE
        );
    }

    let rows: String = wishlist
        .items()
        .iter()
        .map(|item| render_row(item, &image_url))
        .collect();

    format!(
        r#"<table class="shop-table wishlist-table mt-2 mb-4"><thead><tr><th class="product-name"><span>Product</span></th><th></th><th class="product-price"><span>Price</span></th><th class="product-stock-status"><span>Stock status</span></th><th class="product-add-to-cart"></th><th class="product-remove"></th></tr></thead><tbody class="wishlist-items-wrapper">{rows}</tbody></table>"#
    )
}

fn render_row(item: &WishlistItem, image_url: &impl Fn(&str) -> String) -> String {
    let href = escape_html(&item.href());
    let name = escape_html(item.name());
    let image = escape_html(&image_url(&item.product.image));

    let price = match item.price_display() {
        WishlistPrice::Single { price } => {
            format!(r#"<span class="amount">{}</span>"#, price.display())
        }
        WishlistPrice::SaleAndRegular { sale, regular } => format!(
            r#"<span class="amount">{}</span><span class="amount">{}</span>"#,
            sale.display(),
            regular.display()
        ),
    };

    let stock = item.stock_status();
    let action = match item.cart_action() {
        Some(action) => {
            let (target, data) = match &action {
                CartAction::SelectOptions { href } => (escape_html(href), String::new()),
                CartAction::AddToCart => (
                    "#".to_string(),
                    format!(r#" data-slug="{}""#, escape_html(item.slug.as_str())),
                ),
            };
            format!(
                r#"<a href="{target}" class="btn-product btn-primary"{data}><span>{}</span></a>"#,
                action.label()
            )
        }
        None => String::new(),
    };

    format!(
        r##"<tr><td class="product-thumbnail"><a href="{href}"><figure><img src="{image}" width="100" height="100" alt="product"></figure></a></td><td class="product-name"><a href="{href}">{name}</a></td><td class="product-price">{price}</td><td class="product-stock-status"><span class="{stock_class}">{stock_label}</span></td><td class="product-add-to-cart">{action}</td><td class="product-remove"><div><a href="#" class="remove" title="Remove this product" data-slug="{slug}"><i class="fas fa-times"></i></a></div></td></tr>"##,
        stock_class = stock.css_class(),
        stock_label = stock.label(),
        slug = escape_html(item.slug.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Offer, Product, Variation};
    use crate::money::{Currency, Money};

    fn image_url(path: &str) -> String {
        format!("https://img.test/products/{path}")
    }

    #[test]
    fn test_empty_state() {
        let html = render_wishlist(&Wishlist::new(), image_url);
        assert!(html.contains(EMPTY_WISHLIST_MESSAGE));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_rows() {
        let mut list = Wishlist::new();
        list.add(
            WishlistItem::new(
                Product::new(1u64, "Tom & Jerry Tee")
                    .with_image("tee.png")
                    .with_variation(
                        Variation::new(Money::new(10000, Currency::AED))
                            .with_offer(Offer::new(Money::new(10000, Currency::AED), 25.0)),
                    ),
                "tee",
            )
            .with_stock(2)
            .with_sale_price(Money::new(7500, Currency::AED))
            .with_price(vec![Money::new(7500, Currency::AED), Money::new(10000, Currency::AED)]),
        );
        list.add(WishlistItem::new(Product::new(2u64, "Cap"), "cap"));

        let html = render_wishlist(&list, image_url);
        assert!(html.contains("Tom &amp; Jerry Tee"));
        assert!(html.contains("https://img.test/products/tee.png"));
        assert!(html.contains("AED 75.00</span><span class=\"amount\">AED 100.00"));
        assert!(html.contains("Add to Cart"));
        assert!(html.contains("wishlist-out-stock"));
    }
}
