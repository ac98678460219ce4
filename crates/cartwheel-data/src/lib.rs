//! Catalog HTTP client for Cartwheel.
//!
//! A thin fetch-and-parse wrapper over the remote product-catalog API.
//! The client exposes the catalog's GET surface (listing, by id, by
//! category, category names) and maps transport failures, non-success
//! statuses, and malformed bodies to [`CatalogError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_data::CatalogClient;
//!
//! let catalog = CatalogClient::default();
//! let products = catalog.products().await?;
//! let shirts = catalog.products_in_category("men's clothing").await?;
//! ```

mod client;
mod error;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::CatalogError;
