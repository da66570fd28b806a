//! Storefront error types.
//!
//! The error surface is deliberately small: every operation is an
//! in-memory state mutation, so all errors are local and recoverable.
//! Lookups that miss return [`StoreError::ProductNotFound`] rather than
//! silently doing nothing, so callers can surface the miss to the user.

use forge_fitness_core::ProductId;
use thiserror::Error;

/// Errors produced by storefront operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A product id was not present in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A quantity below 1 was passed where a positive quantity is required.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// A proportional rescale was requested while the base price is zero.
    ///
    /// The ratio `new / old` is undefined at zero, so the operation is
    /// rejected instead of propagating a division by zero into every
    /// variant price.
    #[error("cannot rescale variants of product {0}: base price is zero")]
    ZeroBasePrice(ProductId),
}

/// Result type alias for [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::ProductNotFound(ProductId::new("missing"));
        assert_eq!(err.to_string(), "product not found: missing");

        let err = StoreError::InvalidQuantity(0);
        assert_eq!(err.to_string(), "quantity must be at least 1, got 0");
    }
}
