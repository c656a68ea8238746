//! Product catalog module.
//!
//! Contains the product data model as delivered by the product API, and the
//! price summary derived from it for listings.

pub(crate) mod loose;
mod pricing;
mod product;

pub use pricing::{PriceDisplay, PriceSummary};
pub use product::{CatalogPayload, Offer, Product, ProductStatus, Variation};
