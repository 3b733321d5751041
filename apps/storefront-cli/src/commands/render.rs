//! Plain-text rendering of the view-models.

use std::fmt::Write;

use storefront_core::view::{CartView, ProductCard, ProductDetail, WishlistView};

use crate::state::Notification;

pub fn product_grid(cards: &[ProductCard]) -> String {
    if cards.is_empty() {
        return "No products loaded. Try 'reload'.".to_string();
    }

    let mut out = String::new();
    for card in cards {
        let _ = write!(
            out,
            "[{}] {}  {}  ★ {}",
            card.id, card.title, card.price, card.rating
        );
        if let Some(badge) = &card.discount_badge {
            let _ = write!(out, "  -{}", badge);
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn product_detail(detail: &ProductDetail) -> String {
    let mut out = format!("{}\n{}\n", detail.title, detail.price);
    if let Some(category) = &detail.category {
        let _ = writeln!(out, "Category: {}", category);
    }
    if !detail.description.is_empty() {
        let _ = writeln!(out, "\n{}", detail.description);
    }
    if let Some(policy) = &detail.return_policy {
        let _ = writeln!(out, "\n{}", policy);
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn cart(view: &CartView) -> String {
    if let Some(message) = &view.empty_message {
        return message.clone();
    }

    let mut out = format!("Cart ({} items)\n", view.count);
    for line in &view.lines {
        let _ = writeln!(
            out,
            "[{}] {}  {} x {}  Subtotal: {}",
            line.id, line.title, line.unit_price, line.quantity, line.subtotal
        );
    }
    let _ = write!(out, "Total: {}", view.total);
    out
}

pub fn wishlist(view: &WishlistView) -> String {
    if let Some(message) = &view.empty_message {
        return message.clone();
    }

    view.entries
        .iter()
        .map(|entry| format!("[{}] {}  {}", entry.id, entry.title, entry.price))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn load_error(message: &str) -> String {
    format!("⚠️ {}", message)
}

pub fn notification(notification: &Notification) -> String {
    format!("» {}", notification.message)
}

pub fn help() -> String {
    [
        "list              show all products",
        "view <id>         product details",
        "close             close product details",
        "add <id>          add to cart",
        "inc <id>          increase quantity",
        "dec <id>          decrease quantity",
        "remove <id>       remove from cart",
        "wish <id>         add to or remove from wishlist",
        "unwish <id>       remove from wishlist",
        "cart              show cart",
        "wishlist          show wishlist",
        "clear             empty the cart",
        "reload            fetch products again",
        "help              this list",
        "quit              leave",
    ]
    .join("\n")
}
