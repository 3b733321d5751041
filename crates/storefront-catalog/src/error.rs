//! # Catalog Error Types
//!
//! Error types for product fetching and source configuration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  Decode                 │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  UnexpectedShape        │ │
//! │  │  ConfigLoad/Save│  │  HttpStatus     │  │  Empty                  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant renders a human-readable message; the UI layer shows it
//! inline in place of the product grid.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid product API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the connection dropped.
    #[error("Failed to fetch products: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Product request timed out after {0} seconds")]
    Timeout(u64),

    /// The API answered with a non-success status.
    #[error("Product API returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// Fixture file could not be read.
    #[error("Failed to read product fixture: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Body was not valid JSON.
    #[error("Product data is not valid JSON: {0}")]
    Decode(String),

    /// JSON was valid but neither a product list nor a `products` envelope.
    #[error("Unexpected product data: {0}")]
    UnexpectedShape(String),

    /// The source returned no usable products.
    #[error("No products available")]
    Empty,
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CatalogError::HttpStatus {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return CatalogError::Decode(err.to_string());
        }
        CatalogError::Network(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogError {
    /// Returns true if trying the same fetch again could succeed.
    ///
    /// Nothing retries automatically; the UI uses this to decide whether to
    /// offer a reload.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Network(_) | CatalogError::Timeout(_) => true,
            CatalogError::HttpStatus { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig(_)
                | CatalogError::InvalidUrl(_)
                | CatalogError::ConfigLoadFailed(_)
                | CatalogError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(CatalogError::Network("connection refused".into()).is_retryable());
        assert!(CatalogError::Timeout(10).is_retryable());
        assert!(CatalogError::HttpStatus { status: 503 }.is_retryable());

        assert!(!CatalogError::HttpStatus { status: 404 }.is_retryable());
        assert!(!CatalogError::Decode("eof".into()).is_retryable());
        assert!(!CatalogError::InvalidConfig("bad".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CatalogError::HttpStatus { status: 404 }.to_string(),
            "Product API returned HTTP 404"
        );
        assert_eq!(CatalogError::Empty.to_string(), "No products available");
    }

    #[test]
    fn test_config_errors() {
        let err: CatalogError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(err.is_config_error());
    }
}
