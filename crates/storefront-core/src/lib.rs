//! # storefront-core: Pure Catalog/Cart Logic
//!
//! This crate holds the reusable contract of the storefront: cart, wishlist
//! and product utilities, written as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                UI layer (terminal shell / web page)             │   │
//! │  │    Product grid ──► Cart modal ──► Wishlist modal               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ view-models                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Storefront store (apps/storefront-cli)          │   │
//! │  │    owns products, cart, wishlist; publishes snapshots           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ wishlist  │  │ validation│  │   │
//! │  │   │  Product  │  │ add/remove│  │  toggle   │  │ normalize │  │   │
//! │  │   │  CartLine │  │ total     │  │           │  │  records  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          storefront-catalog (HTTP API / static fixture)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, CartLine, ProductId
//! - [`cart`] - Cart transforms (add, remove, update quantity, total)
//! - [`wishlist`] - Wishlist toggle
//! - [`catalog`] - Product lookup
//! - [`validation`] - Normalization of raw product records
//! - [`view`] - Render contract (state → view-model)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Immutable updates**: every transform borrows its input and returns a
//!    new sequence. The caller replaces its state with the return value.
//! 2. **No I/O**: fetching lives in `storefront-catalog`.
//! 3. **Pass-through**: unknown product fields survive every transform.
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::{add_item, calculate_total};
//! use storefront_core::Product;
//!
//! let product = Product::new(1, "Product 1", 10.0);
//! let cart = add_item(&[], &product);
//! let cart = add_item(&cart, &product);
//!
//! assert_eq!(cart[0].quantity, 2);
//! assert_eq!(calculate_total(&cart), 20.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
pub mod view;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used when no display configuration is supplied.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

/// Message shown in place of the cart lines when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Message shown in place of the wishlist entries when the wishlist is empty.
pub const EMPTY_WISHLIST_MESSAGE: &str = "Your wishlist is empty";
