//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not in the wishlist.
    #[error("Item not in wishlist: {0}")]
    ItemNotInWishlist(String),

    /// Item cannot be moved to the cart because it has no stock.
    #[error("Item out of stock: {0}")]
    OutOfStock(String),

    /// Item has option choices and must be configured on its product page.
    #[error("Item requires option selection: {0}")]
    RequiresOptions(String),

    /// Unparseable countdown deadline.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
