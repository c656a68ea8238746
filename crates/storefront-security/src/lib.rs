//! Markup sanitization for storefront rendering.
//!
//! This crate provides:
//! - `SafeHtml` - Markup that has been sanitized or escaped and may be
//!   injected as raw HTML
//! - `sanitize_markup` - Removes script blocks and inline event handlers
//! - `highlight_match` - Emphasizes a search term inside a product name
//!
//! # Example
//!
//! ```
//! use storefront_security::{highlight_match, sanitize_markup};
//!
//! let safe = sanitize_markup(r#"<img src=x onerror="alert(1)">"#);
//! assert_eq!(safe.as_str(), "<img src=x>");
//!
//! let name = highlight_match("Red Runner", "run");
//! assert_eq!(name.as_str(), "Red <strong>Run</strong>ner");
//! ```

mod highlight;
mod html;
mod sanitize;

pub use highlight::*;
pub use html::*;
pub use sanitize::*;
