//! Product, variation and offer types.

use crate::catalog::loose;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product visibility. Anything truthy in the upstream `status` field marks
/// the product inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductStatus {
    /// Visible and searchable.
    #[default]
    Active,
    /// Hidden from search results.
    Inactive,
}

impl ProductStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ProductStatus::Active)
    }

    /// Upstream flag value.
    pub fn as_flag(&self) -> u8 {
        match self {
            ProductStatus::Active => 0,
            ProductStatus::Inactive => 1,
        }
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_flag())
    }
}

/// A promotional price on a variation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Discounted price.
    #[serde(
        default,
        deserialize_with = "loose::price",
        serialize_with = "loose::serialize_price"
    )]
    pub price: Money,
    /// Discount percentage.
    #[serde(default, deserialize_with = "loose::number")]
    pub discount: f64,
}

impl Offer {
    pub fn new(price: Money, discount: f64) -> Self {
        Self { price, discount }
    }
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// Base price.
    #[serde(
        default,
        deserialize_with = "loose::price",
        serialize_with = "loose::serialize_price"
    )]
    pub price: Money,
    /// Offers, first one is the active offer.
    #[serde(default, deserialize_with = "loose::nullable_seq")]
    pub offers: Vec<Offer>,
}

impl Variation {
    /// Create a variation with no offers.
    pub fn new(price: Money) -> Self {
        Self {
            price,
            offers: Vec::new(),
        }
    }

    /// Add an offer.
    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.offers.push(offer);
        self
    }

    /// The active offer, if any.
    pub fn active_offer(&self) -> Option<&Offer> {
        self.offers.first()
    }
}

/// A product as delivered by the product API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    #[serde(default)]
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Image path relative to the image host's `products/` folder.
    #[serde(default)]
    pub image: String,
    /// Visibility flag.
    #[serde(default, deserialize_with = "loose::status")]
    pub status: ProductStatus,
    /// Variations in upstream order.
    #[serde(default, rename = "variation", deserialize_with = "loose::one_or_many")]
    pub variations: Vec<Variation>,
}

impl Product {
    /// Create an active product with no variations.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the image path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Add a variation.
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Offers across all variations, in order.
    pub fn offers(&self) -> impl Iterator<Item = &Offer> {
        self.variations.iter().flat_map(|v| v.offers.iter())
    }

    /// Link to the product page.
    pub fn href(&self) -> String {
        format!("/product/default/{}", self.id)
    }
}

/// Response body of the product catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPayload {
    #[serde(default, deserialize_with = "loose::nullable_seq")]
    pub data: Vec<Product>,
}

impl CatalogPayload {
    /// Parse a catalog response body.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let payload = CatalogPayload::from_json(
            r#"{
                "data": [
                    {"id": 1, "name": "Red Runner", "image": "red.png", "status": 0,
                     "variation": [{"price": 100, "offers": [{"price": 80, "discount": 20}]}]},
                    {"id": "2", "name": "Blue Boot", "image": "blue.png", "status": 1,
                     "variation": {"price": "55.5", "offers": null}},
                    {"id": 3, "name": "Bare"}
                ],
                "meta": {"total": 3}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.data.len(), 3);

        let red = &payload.data[0];
        assert!(red.is_active());
        assert_eq!(red.variations[0].price.amount_minor, 10000);
        assert_eq!(red.variations[0].active_offer().unwrap().discount, 20.0);

        let blue = &payload.data[1];
        assert!(!blue.is_active());
        assert_eq!(blue.variations.len(), 1);
        assert_eq!(blue.variations[0].price.amount_minor, 5550);
        assert!(blue.variations[0].offers.is_empty());

        let bare = &payload.data[2];
        assert!(bare.variations.is_empty());
        assert_eq!(bare.href(), "/product/default/3");
    }

    #[test]
    fn test_null_data_is_empty() {
        let payload = CatalogPayload::from_json(r#"{"data": null}"#).unwrap();
        assert!(payload.data.is_empty());
    }

    #[test]
    fn test_offers_flatten_across_variations() {
        let product = Product::new(1u64, "Tee")
            .with_variation(Variation::new(Money::default()))
            .with_variation(
                Variation::new(Money::default()).with_offer(Offer::new(Money::default(), 5.0)),
            );
        assert_eq!(product.offers().count(), 1);
    }

    #[test]
    fn test_serialize_uses_upstream_shape() {
        let product = Product::new(7u64, "Cap")
            .with_status(ProductStatus::Inactive)
            .with_variation(Variation::new(Money::new(2500, Default::default())));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["status"], 1);
        assert_eq!(json["variation"][0]["price"], 25.0);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
