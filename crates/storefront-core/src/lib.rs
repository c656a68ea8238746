//! Configuration and routing primitives for the storefront.
//!
//! This crate provides:
//! - `StorefrontConfig` - API, image and search settings with env overrides
//! - `RouteState` - The active route as seen by page components
//! - `NavigationRequest` - A route push requested by a component

mod config;
mod error;
mod route;

pub use config::*;
pub use error::*;
pub use route::*;
