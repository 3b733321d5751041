//! # Storefront Store
//!
//! Owns the product list, cart and wishlist for one shopper session.
//!
//! ## Update-and-Notify
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Operations                                │
//! │                                                                         │
//! │  Shell Command           Store Method             Snapshot Change       │
//! │  ─────────────           ────────────             ───────────────       │
//! │                                                                         │
//! │  reload ────────────────► load_products() ──────► products replaced    │
//! │                                                                         │
//! │  add <id> ──────────────► add_to_cart() ────────► cart = add_item(..)  │
//! │                                                                         │
//! │  inc / dec <id> ────────► increase()/decrease() ► update_quantity(..)  │
//! │                                                                         │
//! │  remove <id> ───────────► remove_from_cart() ───► remove_item(..)      │
//! │                                                                         │
//! │  wish <id> ─────────────► toggle_wishlist() ────► toggle_item(..)      │
//! │                                                                         │
//! │  After every change: snapshot ──► watch::Sender ──► subscribers        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutation goes through `&mut self`, so there is exactly one writer and no
//! lock. Each method replaces the cart or wishlist with the value returned by
//! the pure functions in `storefront_core`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_catalog::ProductSource;
use storefront_core::cart::{self, add_item, remove_item, update_quantity};
use storefront_core::catalog::{find_product, require_product};
use storefront_core::wishlist::{toggle_item, ToggleAction};
use storefront_core::{CartLine, Product, ProductId, WishlistEntry};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::CliError;

pub const ADDED_TO_CART: &str = "🛒 Added to cart";
pub const ADDED_TO_WISHLIST: &str = "💖 Added to wishlist";
pub const TOGGLED_OFF_WISHLIST: &str = "❌ Removed from wishlist";
pub const REMOVED_FROM_WISHLIST: &str = "Removed from wishlist ❌";
pub const REMOVED_FROM_CART: &str = "Removed from cart 🗑️";
pub const CART_CLEARED: &str = "Cart cleared";

// =============================================================================
// Snapshot
// =============================================================================

/// Everything a renderer needs, published after every change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSnapshot {
    pub products: Vec<Product>,
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<WishlistEntry>,

    /// Product shown in the detail modal.
    pub selected: Option<Product>,

    /// True while a fetch is in flight.
    pub loading: bool,

    /// Message from the last failed fetch, cleared by a successful one.
    pub load_error: Option<String>,

    /// Bumped on every publish.
    pub revision: u64,
}

// =============================================================================
// Notifications
// =============================================================================

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Increases by one per notification in a session.
    pub id: u64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    fn new(id: u64, message: &str, now: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Notification {
            id,
            message: message.into(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Store
// =============================================================================

pub struct Storefront<S: ProductSource> {
    source: S,
    snapshot: StorefrontSnapshot,
    notifications: Vec<Notification>,
    next_notification_id: u64,
    notification_ttl: chrono::Duration,
    state_tx: watch::Sender<StorefrontSnapshot>,
}

impl<S: ProductSource> Storefront<S> {
    /// Creates an empty store. Call [`Storefront::load_products`] to populate it.
    pub fn new(source: S, notification_ttl: Duration) -> Self {
        let (state_tx, _) = watch::channel(StorefrontSnapshot::default());

        Storefront {
            source,
            snapshot: StorefrontSnapshot::default(),
            notifications: Vec::new(),
            next_notification_id: 1,
            notification_ttl: chrono::Duration::from_std(notification_ttl)
                .unwrap_or_else(|_| chrono::Duration::days(1)),
            state_tx,
        }
    }

    /// Subscribes to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<StorefrontSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn snapshot(&self) -> &StorefrontSnapshot {
        &self.snapshot
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetches the product list from the source.
    ///
    /// On failure the error message is recorded in `load_error` and the
    /// previous products, cart and wishlist are left as they were.
    pub async fn load_products(&mut self) -> Result<usize, CliError> {
        self.snapshot.loading = true;
        self.publish();

        let result = self.source.fetch_products().await;
        self.snapshot.loading = false;

        match result {
            Ok(products) => {
                let count = products.len();
                info!(count, "Product list loaded");
                self.snapshot.products = products;
                self.snapshot.load_error = None;
                self.publish();
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Product fetch failed");
                self.snapshot.load_error = Some(e.to_string());
                self.publish();
                Err(e.into())
            }
        }
    }

    /// Opens the detail view for a product.
    pub fn view_product(&mut self, id: &ProductId) -> Result<Product, CliError> {
        let product = require_product(&self.snapshot.products, id)?.clone();
        debug!(%id, "view_product");

        self.snapshot.selected = Some(product.clone());
        self.publish();
        Ok(product)
    }

    pub fn close_product(&mut self) {
        if self.snapshot.selected.take().is_some() {
            self.publish();
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<(), CliError> {
        let product = require_product(&self.snapshot.products, id)?;
        self.snapshot.cart = add_item(&self.snapshot.cart, product);
        debug!(%id, count = cart::cart_count(&self.snapshot.cart), "add_to_cart");

        self.notify(ADDED_TO_CART);
        self.publish();
        Ok(())
    }

    pub fn increase(&mut self, id: &ProductId) {
        self.change_quantity(id, 1);
    }

    /// Decrements a line's quantity. The line stays in the cart at zero.
    pub fn decrease(&mut self, id: &ProductId) {
        self.change_quantity(id, -1);
    }

    fn change_quantity(&mut self, id: &ProductId, delta: i64) {
        self.snapshot.cart = update_quantity(&self.snapshot.cart, id, delta);
        debug!(%id, delta, "update_quantity");
        self.publish();
    }

    /// Drops the cart line for `id`. Returns false if there was no such line.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let updated = remove_item(&self.snapshot.cart, id);
        let removed = updated.len() != self.snapshot.cart.len();
        debug!(%id, removed, "remove_from_cart");

        if removed {
            self.snapshot.cart = updated;
            self.notify(REMOVED_FROM_CART);
            self.publish();
        }
        removed
    }

    pub fn clear_cart(&mut self) {
        self.snapshot.cart = cart::clear_cart(&self.snapshot.cart);
        debug!("clear_cart");

        self.notify(CART_CLEARED);
        self.publish();
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    pub fn toggle_wishlist(&mut self, id: &ProductId) -> Result<ToggleAction, CliError> {
        let product = require_product(&self.snapshot.products, id)?;
        let toggled = toggle_item(&self.snapshot.wishlist, product);
        self.snapshot.wishlist = toggled.updated_list;
        debug!(%id, action = ?toggled.action, "toggle_wishlist");

        self.notify(match toggled.action {
            ToggleAction::Added => ADDED_TO_WISHLIST,
            ToggleAction::Removed => TOGGLED_OFF_WISHLIST,
        });
        self.publish();
        Ok(toggled.action)
    }

    /// Removes an entry from the wishlist view. Returns false if it was not there.
    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> bool {
        let Some(entry) = find_product(&self.snapshot.wishlist, id) else {
            debug!(%id, removed = false, "remove_from_wishlist");
            return false;
        };

        let toggled = toggle_item(&self.snapshot.wishlist, entry);
        self.snapshot.wishlist = toggled.updated_list;
        debug!(%id, removed = true, "remove_from_wishlist");

        self.notify(REMOVED_FROM_WISHLIST);
        self.publish();
        true
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Live notifications, oldest first. Expired ones are dropped.
    pub fn notifications(&mut self) -> &[Notification] {
        self.prune_notifications(Utc::now())
    }

    pub fn prune_notifications(&mut self, now: DateTime<Utc>) -> &[Notification] {
        self.notifications.retain(|n| !n.is_expired_at(now));
        &self.notifications
    }

    fn notify(&mut self, message: &str) {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications
            .push(Notification::new(id, message, Utc::now(), self.notification_ttl));
    }

    fn publish(&mut self) {
        self.snapshot.revision += 1;
        self.state_tx.send_replace(self.snapshot.clone());
    }
}
