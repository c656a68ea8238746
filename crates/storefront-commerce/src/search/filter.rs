//! Product name filter.

use crate::catalog::Product;

/// Terms shorter than this never match anything.
pub const DEFAULT_MIN_CHARS: usize = 3;

/// Case-insensitive substring filter over active products.
///
/// Results keep the catalog order; there is no relevance ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductFilter {
    min_chars: usize,
}

impl ProductFilter {
    /// Create a filter with a minimum term length in characters.
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// True if the term is long enough to search for.
    pub fn is_searchable(&self, term: &str) -> bool {
        term.chars().count() >= self.min_chars
    }

    /// True if the product is active and its name contains the term.
    pub fn matches(&self, product: &Product, term: &str) -> bool {
        product.is_active() && contains_ignore_case(&product.name, &term.to_lowercase())
    }

    /// Active products whose name contains the term, in catalog order.
    pub fn apply(&self, products: &[Product], term: &str) -> Vec<Product> {
        if !self.is_searchable(term) {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        active_products(products)
            .filter(|p| contains_ignore_case(&p.name, &needle))
            .cloned()
            .collect()
    }
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CHARS)
    }
}

/// `needle` must already be lowercased.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Only active products.
pub fn active_products(products: &[Product]) -> impl Iterator<Item = &Product> {
    products.iter().filter(|p| p.is_active())
}
