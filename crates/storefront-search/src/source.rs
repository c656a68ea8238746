//! Product catalog sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use storefront_commerce::catalog::{CatalogPayload, Product};

use crate::error::{SearchError, SearchResult};

/// Outcome of a catalog fetch, in the `{ data, loading, error }` shape the
/// storefront's data hooks use.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchState {
    pub data: Option<CatalogPayload>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FetchState {
    pub fn loaded(payload: CatalogPayload) -> Self {
        Self {
            data: Some(payload),
            ..Default::default()
        }
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// The fetched products, or why there are none.
    pub fn into_products(self) -> SearchResult<Vec<Product>> {
        if let Some(error) = self.error {
            return Err(SearchError::Fetch(error));
        }
        match self.data {
            Some(payload) => Ok(payload.data),
            None if self.loading => Err(SearchError::Loading),
            None => Ok(Vec::new()),
        }
    }
}

/// Where the product list comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the current catalog.
    async fn fetch(&self) -> FetchState;
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> FetchState {
        FetchState::loaded(CatalogPayload {
            data: self.products.clone(),
        })
    }
}

/// A catalog response body stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> FetchState {
        let body = match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => body,
            Err(e) => return FetchState::failed(format!("{}: {e}", self.path.display())),
        };

        match CatalogPayload::from_json(&body) {
            Ok(payload) => {
                tracing::debug!(
                    path = %self.path.display(),
                    products = payload.data.len(),
                    "catalog file loaded"
                );
                FetchState::loaded(payload)
            }
            Err(e) => FetchState::failed(format!("{}: {e}", self.path.display())),
        }
    }
}
