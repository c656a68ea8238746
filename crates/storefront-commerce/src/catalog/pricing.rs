//! Listing price derived from a product's variations and offers.

use crate::catalog::{Offer, Product, Variation};
use crate::money::Money;
use serde::Serialize;

/// Base price and active discount of a product.
///
/// The base price is the first variation's price; the active discount is
/// the first offer found across all variations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Price of the first variation, zero if there is none.
    pub base_price: Money,
    /// First offer across all variations.
    pub discount: Option<Offer>,
}

/// What a listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDisplay {
    /// Only the base price.
    Regular { price: Money },
    /// Struck-through base price next to the discounted price.
    Discounted { was: Money, now: Money },
}

impl PriceSummary {
    /// Summarize a product.
    pub fn of(product: &Product) -> Self {
        Self::from_variations(&product.variations)
    }

    /// Summarize a variation list.
    pub fn from_variations(variations: &[Variation]) -> Self {
        let base_price = variations.first().map(|v| v.price).unwrap_or_default();
        let discount = variations
            .iter()
            .flat_map(|v| v.offers.iter())
            .next()
            .cloned();

        Self {
            base_price,
            discount,
        }
    }

    /// Discount percentage of the active offer, zero without one.
    pub fn discount_value(&self) -> f64 {
        self.discount.as_ref().map(|d| d.discount).unwrap_or(0.0)
    }

    /// Discounted price of the active offer. A zero offer price counts as no
    /// price.
    pub fn discount_price(&self) -> Option<Money> {
        self.discount
            .as_ref()
            .map(|d| d.price)
            .filter(|price| !price.is_zero())
    }

    /// True iff the active offer is strictly cheaper than the base price.
    pub fn show_discounted_price(&self) -> bool {
        self.discount_price()
            .is_some_and(|price| price < self.base_price)
    }

    pub fn display(&self) -> PriceDisplay {
        match self.discount_price() {
            Some(now) if self.show_discounted_price() => PriceDisplay::Discounted {
                was: self.base_price,
                now,
            },
            _ => PriceDisplay::Regular {
                price: self.base_price,
            },
        }
    }
}
