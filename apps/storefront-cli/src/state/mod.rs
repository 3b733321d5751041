//! # Application State
//!
//! One [`Storefront`] per session owns products, cart and wishlist. Readers
//! either borrow its current [`StorefrontSnapshot`] or subscribe to changes.

pub mod store;

pub use store::{Notification, Storefront, StorefrontSnapshot};
