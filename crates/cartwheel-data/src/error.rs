//! Catalog client error types.

use thiserror::Error;

/// Errors that can occur when fetching from the catalog API.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
