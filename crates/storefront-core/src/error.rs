//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  └── CoreError        - Lookup and record failures                     │
//! │                                                                         │
//! │  storefront-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Fetch, decode and config failures              │
//! │                                                                         │
//! │  storefront-cli errors (in app)                                        │
//! │  └── CliError         - What the UI layer shows                        │
//! │                                                                         │
//! │  Flow: CoreError → CatalogError → CliError → inline message            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart and wishlist transforms themselves never fail: unknown ids are
//! no-ops and malformed fields fall back to defaults. Errors only appear at
//! the edges, when an id has to be resolved against the product list or a
//! raw record has to become a [`Product`](crate::Product).

use thiserror::Error;

use crate::types::ProductId;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product in the current list carries this identifier.
    ///
    /// ## When This Occurs
    /// - The UI passes an id scraped from stale markup
    /// - The product list was reloaded and the product disappeared
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A raw record could not be turned into a product.
    #[error("Invalid product record: {reason}")]
    InvalidRecord { reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::from(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::ProductNotFound(ProductId::from("abc"));
        assert_eq!(err.to_string(), "Product not found: abc");

        let err = CoreError::InvalidRecord {
            reason: "expected an object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid product record: expected an object"
        );
    }
}
