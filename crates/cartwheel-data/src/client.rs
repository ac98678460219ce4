//! Catalog fetch client.

use cartwheel_commerce::{Product, ProductId};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CatalogError;

/// Base URL of the public store API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Thin client for the remote product catalog.
///
/// Fetch-and-parse only: no retry, caching, or pagination. A non-success
/// status or transport failure maps to a [`CatalogError`] for the caller to
/// present; the cart never sees these errors.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full product listing.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    /// Fetch a single product by id.
    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_json(&format!("/products/{id}")).await
    }

    /// Fetch the products in a category.
    pub async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&format!("/products/category/{category}")).await
    }

    /// Fetch the list of category names.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/products/categories").await
    }

    /// Build the absolute URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.url(path);
        debug!(%url, "catalog fetch");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
