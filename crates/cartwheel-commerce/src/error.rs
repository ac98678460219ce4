//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// Removal and update of an absent id are deliberately not errors; those
/// operations report a no-op through their return value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Quantity must be strictly positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}
