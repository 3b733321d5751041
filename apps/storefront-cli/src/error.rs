//! # CLI Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell                       Store / Catalog                            │
//! │  ─────                       ───────────────                            │
//! │                                                                         │
//! │  > add 99                                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Storefront::add_to_cart                                         │  │
//! │  │  Result<T, CliError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ──── CoreError::ProductNotFound ─────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Fetch failed? ── CatalogError::Network ───────► CliError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ⚠️ Product not found: 99                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CliError` serializes to `{ "code": "NOT_FOUND", "message": "..." }` so a
//! host page driving the store over JSON gets the same shape.

use serde::Serialize;
use storefront_catalog::CatalogError;
use storefront_core::CoreError;
use thiserror::Error;

/// Error returned from store operations and shell commands.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the current list
    NotFound,

    /// Shell input could not be parsed
    InvalidCommand,

    /// Product source failed (network, HTTP status, bad payload)
    FetchFailed,

    /// Configuration could not be loaded, validated or saved
    ConfigError,

    /// A raw product record was rejected
    InvalidRecord,

    /// Anything else
    Internal,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::InvalidCommand, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => CliError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::InvalidRecord { .. } => {
                CliError::new(ErrorCode::InvalidRecord, err.to_string())
            }
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        if err.is_config_error() {
            return CliError::new(ErrorCode::ConfigError, err.to_string());
        }
        if let CatalogError::Io(ref io) = err {
            tracing::error!("Product fixture unreadable: {}", io);
        }
        CliError::new(ErrorCode::FetchFailed, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    #[test]
    fn test_core_error_mapping() {
        let err: CliError = CoreError::ProductNotFound(ProductId::from(99)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    #[test]
    fn test_catalog_error_mapping() {
        let err: CliError = CatalogError::HttpStatus { status: 500 }.into();
        assert_eq!(err.code, ErrorCode::FetchFailed);
        assert_eq!(err.message, "Product API returned HTTP 500");

        let err: CliError = CatalogError::InvalidUrl("nope".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_serialization() {
        let err = CliError::new(ErrorCode::NotFound, "Product not found: 7");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 7");
    }
}
