//! # storefront-catalog: Product Retrieval
//!
//! Owns every piece of I/O the storefront needs to get its product list:
//! the remote product API, the static fixture, and the configuration that
//! picks between them.
//!
//! ## Module Organization
//! ```text
//! storefront_catalog/
//! ├── lib.rs          ◄─── You are here
//! ├── config.rs       ◄─── StorefrontConfig (TOML + env overrides)
//! ├── source.rs       ◄─── ProductSource trait, HTTP and fixture sources
//! └── error.rs        ◄─── CatalogError
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use storefront_catalog::{CatalogSource, ProductSource, StorefrontConfig};
//!
//! # async fn demo() -> storefront_catalog::CatalogResult<()> {
//! let config = StorefrontConfig::load(None)?;
//! let source = CatalogSource::from_settings(&config.source)?;
//! let products = source.fetch_products().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod source;

pub use config::{DisplaySettings, SourceKind, SourceSettings, StorefrontConfig};
pub use error::{CatalogError, CatalogResult};
pub use source::{
    decode_products, fetch_products, CatalogSource, FixtureProductSource, HttpProductSource,
    ProductSource,
};
