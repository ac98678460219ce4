//! Cartwheel UI session layer.
//!
//! Wires the storefront together:
//!
//! - [`store::CartStore`] - the single writer over the session cart,
//!   publishing a fresh snapshot to subscribers after every mutation
//! - [`views`] - presentational HTML fragments (navigation, product card,
//!   cart row) that render state and carry user intents as data attributes
//! - [`pages`] - the three routed pages (home, shop, cart)
//! - [`boundary`] - render boundary that swaps a failed subtree for a
//!   generic recovery fragment
//! - [`app::App`] - composition root owning the catalog client and the
//!   cart store, passing capabilities down to pages

pub mod app;
pub mod boundary;
pub mod pages;
pub mod store;
pub mod views;

pub use app::{App, Route};
pub use boundary::{render_boundary, render_fallback};
pub use store::{CartIntent, CartSnapshot, CartStore};
