//! # Cart Transforms
//!
//! Immutable-update operations over a cart (`&[CartLine]`).
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Function               Result                  │
//! │  ─────────               ────────               ──────                  │
//! │                                                                         │
//! │  Click cart button ────► add_item() ──────────► qty+1 or new line      │
//! │                                                                         │
//! │  Click +/- ────────────► update_quantity() ───► qty+delta              │
//! │                                                                         │
//! │  Click Remove ─────────► remove_item() ───────► line dropped           │
//! │                                                                         │
//! │  Click Clear Cart ─────► clear_cart() ────────► []                     │
//! │                                                                         │
//! │  Render summary ───────► calculate_total() ───► Σ price × qty          │
//! │                                                                         │
//! │  NOTE: every function borrows the cart and returns a NEW Vec.          │
//! │        The caller swaps its state for the return value.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{CartLine, Product, ProductId};

/// Adds a product to the cart or increases its quantity if already present.
///
/// ## Behavior
/// - Product already in cart: that line's quantity +1, order unchanged
/// - Product not in cart: new line with quantity 1 appended at the end
///
/// ## Example
/// ```rust
/// use storefront_core::cart::add_item;
/// use storefront_core::Product;
///
/// let p = Product::new(1, "Product 1", 10.0);
/// let cart = add_item(&add_item(&[], &p), &p);
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart[0].quantity, 2);
/// ```
pub fn add_item(cart: &[CartLine], product: &Product) -> Vec<CartLine> {
    if cart.iter().any(|line| line.id() == &product.id) {
        return cart
            .iter()
            .map(|line| {
                if line.id() == &product.id {
                    CartLine {
                        quantity: line.quantity.saturating_add(1),
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .collect();
    }

    let mut updated = cart.to_vec();
    updated.push(CartLine::from_product(product, 1));
    updated
}

/// Removes every line whose id equals `id`.
///
/// Unknown ids leave the cart unchanged.
pub fn remove_item(cart: &[CartLine], id: &ProductId) -> Vec<CartLine> {
    cart.iter().filter(|line| line.id() != id).cloned().collect()
}

/// Adds `delta` (may be negative) to the quantity of the line matching `id`.
///
/// A line whose quantity reaches zero or below is kept as-is; removal is the
/// caller's decision via [`remove_item`]. Quantities saturate at the `i64`
/// bounds instead of overflowing.
pub fn update_quantity(cart: &[CartLine], id: &ProductId, delta: i64) -> Vec<CartLine> {
    cart.iter()
        .map(|line| {
            if line.id() == id {
                CartLine {
                    quantity: line.quantity.saturating_add(delta),
                    ..line.clone()
                }
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Sum of `price × quantity` over all lines. No rounding is applied.
pub fn calculate_total(cart: &[CartLine]) -> f64 {
    cart.iter().map(CartLine::subtotal).sum()
}

/// Empties the cart.
pub fn clear_cart(_cart: &[CartLine]) -> Vec<CartLine> {
    Vec::new()
}

/// Total quantity across all lines (the cart icon badge). Saturates at the
/// `i64` bounds.
pub fn cart_count(cart: &[CartLine]) -> i64 {
    cart.iter()
        .fold(0i64, |count, line| count.saturating_add(line.quantity))
}
