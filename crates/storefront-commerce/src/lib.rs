//! Catalog, pricing, wishlist and promo logic for the storefront.
//!
//! - **Catalog**: Products, variations, offers, and the price summary shown
//!   next to a product in listings
//! - **Search**: The active-product, case-insensitive name filter
//! - **Wishlist**: Saved items, their price/stock display and cart moves
//! - **Promo**: Countdown banners for time-limited offers
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let payload = CatalogPayload::from_json(
//!     r#"{"data": [{"id": 1, "name": "Red Runner", "image": "red.png",
//!        "status": 0, "variation": [{"price": 100, "offers": [{"price": 80, "discount": 20}]}]}]}"#,
//! ).unwrap();
//!
//! let filter = ProductFilter::default();
//! let hits = filter.apply(&payload.data, "runner");
//! assert_eq!(hits.len(), 1);
//!
//! let summary = PriceSummary::of(&hits[0]);
//! assert!(summary.show_discounted_price());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod promo;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogPayload, Offer, PriceDisplay, PriceSummary, Product, ProductStatus, Variation,
    };

    // Search
    pub use crate::search::ProductFilter;

    // Wishlist
    pub use crate::wishlist::{CartAction, CartLine, StockStatus, Wishlist, WishlistItem, WishlistPrice};

    // Promo
    pub use crate::promo::{Countdown, CountdownStyle, Remaining};
}
