//! Wishlist module.
//!
//! Saved items, the price/stock/cart columns of the wishlist table, and
//! moving an item into the cart.

mod item;
mod list;
mod render;

pub use item::{CartAction, CartLine, StockStatus, WishlistItem, WishlistPrice};
pub use list::Wishlist;
pub use render::{render_wishlist, EMPTY_WISHLIST_MESSAGE};
