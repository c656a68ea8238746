//! Search module.
//!
//! Contains the product name filter used by live search.

mod filter;

pub use filter::{active_products, ProductFilter, DEFAULT_MIN_CHARS};
