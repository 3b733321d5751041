//! # Render Contract
//!
//! View-models derived from storefront state. A UI layer (the terminal shell,
//! or a web page through the generated TypeScript bindings) renders these and
//! nothing else; it never reaches into [`Product`] or [`CartLine`] directly.
//!
//! ```text
//! ┌──────────────┐      ┌────────────────────┐      ┌──────────────────┐
//! │   products   │─────►│ product_cards()    │─────►│ product grid     │
//! │   cart       │─────►│ cart_view()        │─────►│ cart modal       │
//! │   wishlist   │─────►│ wishlist_view()    │─────►│ wishlist modal   │
//! └──────────────┘      └────────────────────┘      └──────────────────┘
//! ```
//!
//! Prices are pre-formatted with two decimals (`R12.34`); totals also carry
//! the raw number for UIs that format themselves.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{calculate_total, cart_count};
use crate::types::{CartLine, Product, WishlistEntry};
use crate::{EMPTY_CART_MESSAGE, EMPTY_WISHLIST_MESSAGE};

/// Formats an amount with a currency symbol and two decimals.
///
/// The sign follows the symbol (`R-5.00`), as the storefront page shows it.
///
/// ```rust
/// use storefront_core::view::format_price;
///
/// assert_eq!(format_price("R", 10.0), "R10.00");
/// assert_eq!(format_price("$", 3.456), "$3.46");
/// ```
pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

// =============================================================================
// Product Grid
// =============================================================================

/// One tile in the product grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub rating: f64,
    pub price: String,
    /// `"10%"`; absent when the product has no discount.
    pub discount_badge: Option<String>,
}

impl ProductCard {
    pub fn new(product: &Product, symbol: &str) -> Self {
        ProductCard {
            id: product.id.to_string(),
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            rating: product.rating,
            price: format_price(symbol, product.price),
            discount_badge: product
                .has_discount()
                .then(|| format!("{}%", product.discount_percentage)),
        }
    }
}

/// Builds the product grid in catalog order.
pub fn product_cards(products: &[Product], symbol: &str) -> Vec<ProductCard> {
    products.iter().map(|p| ProductCard::new(p, symbol)).collect()
}

/// The product detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub price: String,
    pub description: String,
    pub category: Option<String>,
    pub return_policy: Option<String>,
}

impl ProductDetail {
    pub fn new(product: &Product, symbol: &str) -> Self {
        ProductDetail {
            id: product.id.to_string(),
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            price: format_price(symbol, product.price),
            description: product.description.clone().unwrap_or_default(),
            category: product.category.clone(),
            return_policy: product.return_policy.clone(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub unit_price: String,
    pub quantity: i64,
    pub subtotal: String,
}

/// The cart modal plus the cart icon badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Total quantity, shown on the cart icon.
    pub count: i64,
    pub total: String,
    pub total_value: f64,
    /// Placeholder text when there are no lines.
    pub empty_message: Option<String>,
}

pub fn cart_view(cart: &[CartLine], symbol: &str) -> CartView {
    let total_value = calculate_total(cart);

    CartView {
        lines: cart
            .iter()
            .map(|line| CartLineView {
                id: line.id().to_string(),
                title: line.product.title.clone(),
                thumbnail: line.product.thumbnail.clone(),
                unit_price: format_price(symbol, line.product.price),
                quantity: line.quantity,
                subtotal: format_price(symbol, line.subtotal()),
            })
            .collect(),
        count: cart_count(cart),
        total: format_price(symbol, total_value),
        total_value,
        empty_message: cart.is_empty().then(|| EMPTY_CART_MESSAGE.to_string()),
    }
}

// =============================================================================
// Wishlist
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntryView {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub entries: Vec<WishlistEntryView>,
    pub empty_message: Option<String>,
}

pub fn wishlist_view(wishlist: &[WishlistEntry], symbol: &str) -> WishlistView {
    WishlistView {
        entries: wishlist
            .iter()
            .map(|entry| WishlistEntryView {
                id: entry.id.to_string(),
                title: entry.title.clone(),
                thumbnail: entry.thumbnail.clone(),
                price: format_price(symbol, entry.price),
            })
            .collect(),
        empty_message: wishlist
            .is_empty()
            .then(|| EMPTY_WISHLIST_MESSAGE.to_string()),
    }
}
