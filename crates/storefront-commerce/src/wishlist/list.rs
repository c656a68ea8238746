//! Wishlist collection.

use crate::error::CommerceError;
use crate::wishlist::{CartAction, CartLine, WishlistItem};
use serde::{Deserialize, Serialize};

/// Saved items in insertion order, unique by slug. Items without a slug are
/// never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let items: Vec<WishlistItem> = serde_json::from_str(json)?;
        let mut wishlist = Self::new();
        for item in items {
            wishlist.add(item);
        }
        Ok(wishlist)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|i| i.slug.as_str() == slug)
    }

    /// Add an item. Returns false if an item with the same non-empty slug is
    /// present.
    pub fn add(&mut self, item: WishlistItem) -> bool {
        if !item.slug.is_empty() && self.get(item.slug.as_str()).is_some() {
            tracing::debug!(slug = %item.slug, "duplicate wishlist item skipped");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item by slug.
    pub fn remove(&mut self, slug: &str) -> Option<WishlistItem> {
        let index = self.items.iter().position(|i| i.slug.as_str() == slug)?;
        Some(self.items.remove(index))
    }

    /// Move an item into the cart: one unit at its current price.
    ///
    /// Only items offering [`CartAction::AddToCart`] can be moved; the item
    /// stays in the wishlist on error.
    pub fn move_to_cart(&mut self, slug: &str) -> Result<CartLine, CommerceError> {
        let item = self
            .get(slug)
            .ok_or_else(|| CommerceError::ItemNotInWishlist(slug.to_string()))?;

        match item.cart_action() {
            None => return Err(CommerceError::OutOfStock(slug.to_string())),
            Some(CartAction::SelectOptions { .. }) => {
                return Err(CommerceError::RequiresOptions(slug.to_string()))
            }
            Some(CartAction::AddToCart) => {}
        }

        let line = item.to_cart_line();
        self.remove(slug);
        tracing::debug!(slug, unit_price = %line.unit_price, "moved wishlist item to cart");
        Ok(line)
    }
}
