//! Wishlist items and their display rules.

use crate::catalog::{loose, Product};
use crate::ids::Slug;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A saved product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Catalog fields.
    #[serde(flatten)]
    pub product: Product,
    /// Product page slug.
    #[serde(default)]
    pub slug: Slug,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Sale price shown when the active offer carries a discount.
    #[serde(
        default,
        rename = "salePrice",
        deserialize_with = "loose::price",
        serialize_with = "loose::serialize_price"
    )]
    pub sale_price: Money,
    /// Price pair: `[current, regular]`.
    #[serde(
        default,
        deserialize_with = "loose::price_list",
        serialize_with = "loose::serialize_price_list"
    )]
    pub price: Vec<Money>,
    /// Option choices. Non-empty means the item must be configured first.
    #[serde(default, deserialize_with = "loose::nullable_seq")]
    pub variants: Vec<serde_json::Value>,
}

/// Price column of the wishlist table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WishlistPrice {
    /// A single amount.
    Single { price: Money },
    /// Sale price followed by the regular price.
    SaleAndRegular { sale: Money, regular: Money },
}

/// Stock column of the wishlist table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "wishlist-in-stock",
            StockStatus::OutOfStock => "wishlist-out-stock",
        }
    }
}

/// Action offered in the add-to-cart column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartAction {
    /// Link to the product page to pick options.
    SelectOptions { href: String },
    /// Move straight to the cart.
    AddToCart,
}

impl CartAction {
    pub fn label(&self) -> &'static str {
        match self {
            CartAction::SelectOptions { .. } => "Select options",
            CartAction::AddToCart => "Add to Cart",
        }
    }
}

/// A cart line created from a wishlist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub slug: Slug,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl WishlistItem {
    /// Create an item from a product and its slug.
    pub fn new(product: Product, slug: impl Into<Slug>) -> Self {
        Self {
            product,
            slug: slug.into(),
            ..Default::default()
        }
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = sale_price;
        self
    }

    pub fn with_price(mut self, price: Vec<Money>) -> Self {
        self.price = price;
        self
    }

    pub fn with_variants(mut self, variants: Vec<serde_json::Value>) -> Self {
        self.variants = variants;
        self
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Link to the product page.
    pub fn href(&self) -> String {
        format!("/product/default/{}", self.slug)
    }

    /// First offer price of each variation, zero where a variation has none.
    pub fn offer_prices(&self) -> Vec<Money> {
        self.product
            .variations
            .iter()
            .map(|v| {
                v.active_offer()
                    .map(|o| o.price)
                    .unwrap_or_else(|| Money::zero(v.price.currency))
            })
            .collect()
    }

    /// Which price(s) the wishlist table shows.
    ///
    /// If the first variation's price differs from its offer price the
    /// variation price is shown alone. Otherwise a discounted active offer
    /// shows the sale price next to the regular price.
    pub fn price_display(&self) -> WishlistPrice {
        let first = self.product.variations.first();
        let base = first.map(|v| v.price).unwrap_or_default();
        let offer_price = self
            .offer_prices()
            .first()
            .copied()
            .unwrap_or_else(|| Money::zero(base.currency));

        if base != offer_price {
            return WishlistPrice::Single { price: base };
        }

        let discounted = first
            .and_then(|v| v.active_offer())
            .is_some_and(|o| o.discount > 0.0);

        if discounted {
            WishlistPrice::SaleAndRegular {
                sale: self.sale_price,
                regular: self.regular_price(),
            }
        } else {
            WishlistPrice::Single { price: base }
        }
    }

    /// Regular price from the price pair, falling back to the base price.
    pub fn regular_price(&self) -> Money {
        self.price
            .get(1)
            .or_else(|| self.price.first())
            .copied()
            .unwrap_or_else(|| {
                self.product
                    .variations
                    .first()
                    .map(|v| v.price)
                    .unwrap_or_default()
            })
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.stock > 0 {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Add-to-cart action, none when out of stock.
    pub fn cart_action(&self) -> Option<CartAction> {
        match self.stock_status() {
            StockStatus::OutOfStock => None,
            StockStatus::InStock if !self.variants.is_empty() => Some(CartAction::SelectOptions {
                href: self.href(),
            }),
            StockStatus::InStock => Some(CartAction::AddToCart),
        }
    }

    /// Cart line for one unit at the current price.
    pub fn to_cart_line(&self) -> CartLine {
        let unit_price = self.price.first().copied().unwrap_or_else(|| {
            self.product
                .variations
                .first()
                .map(|v| v.price)
                .unwrap_or_default()
        });

        CartLine {
            slug: self.slug.clone(),
            name: self.product.name.clone(),
            quantity: 1,
            unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Offer, Variation};
    use crate::money::Currency;

    fn aed(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::AED)
    }

    fn item(base: f64, offer: Option<(f64, f64)>) -> WishlistItem {
        let mut variation = Variation::new(aed(base));
        if let Some((price, discount)) = offer {
            variation = variation.with_offer(Offer::new(aed(price), discount));
        }
        WishlistItem::new(Product::new(1u64, "Runner").with_variation(variation), "runner")
            .with_stock(3)
            .with_sale_price(aed(70.0))
            .with_price(vec![aed(70.0), aed(100.0)])
    }

    #[test]
    fn test_parse_upstream_shape() {
        let item: WishlistItem = serde_json::from_str(
            r#"{"id": 9, "name": "Runner", "slug": "runner", "image": "r.png",
                "variation": [{"price": 100, "offers": [{"price": 100, "discount": 30}]}],
                "stock": 2, "salePrice": 70, "price": [70, 100], "variants": []}"#,
        )
        .unwrap();

        assert_eq!(item.product.id.as_str(), "9");
        assert_eq!(item.slug.as_str(), "runner");
        assert_eq!(item.sale_price, aed(70.0));
        assert_eq!(item.price, vec![aed(70.0), aed(100.0)]);
    }

    #[test]
    fn test_offer_prices_default_to_zero() {
        let product = Product::new(1u64, "Tee")
            .with_variation(Variation::new(aed(50.0)).with_offer(Offer::new(aed(40.0), 20.0)))
            .with_variation(Variation::new(aed(60.0)));
        let item = WishlistItem::new(product, "tee");
        assert_eq!(item.offer_prices(), vec![aed(40.0), Money::zero(Currency::AED)]);
    }

    #[test]
    fn test_price_differs_from_offer_shows_base() {
        let item = item(100.0, Some((80.0, 20.0)));
        assert_eq!(item.price_display(), WishlistPrice::Single { price: aed(100.0) });
    }

    #[test]
    fn test_equal_offer_with_discount_shows_sale_and_regular() {
        let item = item(100.0, Some((100.0, 30.0)));
        assert_eq!(
            item.price_display(),
            WishlistPrice::SaleAndRegular {
                sale: aed(70.0),
                regular: aed(100.0)
            }
        );
    }

    #[test]
    fn test_equal_offer_without_discount_shows_base() {
        let item = item(100.0, Some((100.0, 0.0)));
        assert_eq!(item.price_display(), WishlistPrice::Single { price: aed(100.0) });
    }

    #[test]
    fn test_no_offer_shows_base() {
        let item = item(100.0, None);
        assert_eq!(item.price_display(), WishlistPrice::Single { price: aed(100.0) });
    }

    #[test]
    fn test_no_variations_degrades_to_zero() {
        let item = WishlistItem::new(Product::new(1u64, "Ghost"), "ghost");
        assert_eq!(item.price_display(), WishlistPrice::Single { price: Money::default() });
        assert!(item.offer_prices().is_empty());
    }

    #[test]
    fn test_stock_and_cart_action() {
        let in_stock = item(100.0, None);
        assert_eq!(in_stock.stock_status(), StockStatus::InStock);
        assert_eq!(in_stock.cart_action(), Some(CartAction::AddToCart));

        let with_options = in_stock.clone().with_variants(vec![serde_json::json!({"size": "M"})]);
        assert_eq!(
            with_options.cart_action(),
            Some(CartAction::SelectOptions {
                href: "/product/default/runner".to_string()
            })
        );

        let sold_out = in_stock.with_stock(0);
        assert_eq!(sold_out.stock_status().label(), "Out of Stock");
        assert_eq!(sold_out.cart_action(), None);
    }

    #[test]
    fn test_cart_line_uses_current_price() {
        let line = item(100.0, None).to_cart_line();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price, aed(70.0));
    }
}
