//! Cart and catalog domain types for Cartwheel.
//!
//! This crate holds the in-memory core of the storefront:
//!
//! - **Catalog**: the `Product` record as served by the remote store API
//! - **Cart**: an ordered collection of line items, one per product id,
//!   with derived item count and total
//! - **Money**: integer-cents amounts with a decimal wire format
//!
//! The cart performs no I/O and owns no remote state; callers hand it
//! `Product` values obtained elsewhere and read the recomputed aggregates
//! after each mutation.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(product.clone(), 2)?;
//! cart.add(product, 1)?; // same id: quantities merge, 3 total
//!
//! assert_eq!(cart.item_count(), 3);
//! println!("Total: {}", cart.total());
//! ```

pub mod cart;
pub mod error;
pub mod ids;
pub mod money;
pub mod product;

pub use cart::{Cart, LineItem};
pub use error::CartError;
pub use ids::ProductId;
pub use money::Money;
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
    pub use crate::product::Product;
}
