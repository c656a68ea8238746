//! Debounced live product search for the storefront header.
//!
//! This crate provides:
//! - `Debouncer` - A single pending-task slot, replaced on every schedule
//! - `ClickListeners` - Body click listeners with RAII subscriptions
//! - `PanelState` - Open/results state of a search container
//! - `LiveSearch` - The search box session tying these together
//! - `ResultRow` - Render-ready result rows with sanitized names
//! - `CatalogSource` - Where the product list comes from
//!
//! # Example
//!
//! ```ignore
//! use storefront_search::{ClickListeners, LiveSearch, LiveSearchConfig};
//!
//! let listeners = ClickListeners::new();
//! let mut search = LiveSearch::mount(LiveSearchConfig::default(), &listeners, route);
//! search.set_catalog(products);
//! search.on_input("run");
//!
//! let mut results = search.subscribe();
//! results.changed().await?;
//! for row in search.rows() {
//!     println!("{}", row.to_html());
//! }
//! ```

mod debounce;
mod error;
mod listener;
mod panel;
mod render;
mod session;
mod source;

pub use debounce::*;
pub use error::*;
pub use listener::*;
pub use panel::*;
pub use render::*;
pub use session::*;
pub use source::*;
