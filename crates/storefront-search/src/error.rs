//! Live search errors.

use storefront_commerce::CommerceError;

/// Result type for live search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors surfaced by live search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    #[error("catalog is still loading")]
    Loading,

    #[error(transparent)]
    Catalog(#[from] CommerceError),
}
