//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │      CartLine       │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (ProductId)     │──────► │  product (flatten)  │                │
//! │  │  title, price       │        │  quantity           │                │
//! │  │  rating, discount   │        └─────────────────────┘                │
//! │  │  extra (pass-thru)  │                                               │
//! │  └─────────────────────┘        WishlistEntry = Product                │
//! │                                                                         │
//! │  ┌─────────────────────┐                                               │
//! │  │     ProductId       │  Number(1) == Text("1")                       │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Field names follow the upstream product API (`discountPercentage`,
//! `returnPolicy`). Fields this crate does not model are kept in
//! [`Product::extra`] and written back out unchanged.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Product Identifier
// =============================================================================

/// Identifier of a product.
///
/// The product API stores ids as numbers, while the UI layer usually hands
/// them back as text scraped from markup attributes. Equality therefore
/// compares canonical forms: text that parses as an integer (after trimming)
/// is equal to the number with the same value.
///
/// ```rust
/// use storefront_core::ProductId;
///
/// assert_eq!(ProductId::from(7), ProductId::from("7"));
/// assert_eq!(ProductId::from(" 7 "), ProductId::from(7));
/// assert_ne!(ProductId::from("sku-7"), ProductId::from(7));
/// ```
///
/// Serialization keeps the original form, so a text id stays text on the
/// way out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

/// Canonical comparison key behind `Eq` and `Hash`.
#[derive(PartialEq, Eq, Hash)]
enum IdKey<'a> {
    Number(i64),
    Text(&'a str),
}

impl ProductId {
    fn key(&self) -> IdKey<'_> {
        match self {
            ProductId::Number(n) => IdKey::Number(*n),
            ProductId::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => IdKey::Number(n),
                Err(_) => IdKey::Text(s.as_str()),
            },
        }
    }

    /// Returns the numeric value if the id is, or parses as, an integer.
    pub fn as_number(&self) -> Option<i64> {
        match self.key() {
            IdKey::Number(n) => Some(n),
            IdKey::Text(_) => None,
        }
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ProductId {}

impl Hash for ProductId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    /// Parses user input: integers become numeric ids, anything else text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(trimmed.to_string()),
        })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Created by a product source and immutable once retrieved; the cart and
/// wishlist hold copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name.
    #[serde(default)]
    pub title: String,

    /// Unit price. Not sign-checked.
    #[serde(default)]
    pub price: f64,

    /// Long description shown in the product detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Average review score, 0 when unknown.
    #[serde(default)]
    pub rating: f64,

    /// Discount badge value in percent, 0 when none.
    #[serde(default)]
    pub discount_percentage: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,

    /// Fields not modelled above (brand, stock, images, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Creates a product with the required fields and defaults elsewhere.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            price,
            description: None,
            thumbnail: None,
            rating: 0.0,
            discount_percentage: 0.0,
            category: None,
            return_policy: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_discount(mut self, percentage: f64) -> Self {
        self.discount_percentage = percentage;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns true if a discount badge should be shown.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percentage != 0.0
    }
}

/// A wishlist entry is a product without a quantity.
pub type WishlistEntry = Product;

// =============================================================================
// Cart Line
// =============================================================================

/// A product paired with a purchase quantity.
///
/// ## Invariants
/// - At most one line per product id in a cart (see [`crate::cart::add_item`])
/// - `quantity` starts at 1; [`crate::cart::update_quantity`] may drive it to
///   zero or below without removing the line
///
/// Serializes as the product's fields plus `quantity`, matching the shape
/// the UI layer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: i64,
}

impl CartLine {
    /// Creates a cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
        }
    }

    /// Returns the product identifier of this line.
    #[inline]
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Calculates the line subtotal (price × quantity).
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_id_equality_tolerates_text() {
        assert_eq!(ProductId::from(1), ProductId::from("1"));
        assert_eq!(ProductId::from("01"), ProductId::from(1));
        assert_eq!(ProductId::from("abc"), ProductId::from("abc"));
        assert_ne!(ProductId::from("abc"), ProductId::from("abd"));
        assert_ne!(ProductId::from(1), ProductId::from(2));
    }

    #[test]
    fn test_id_hash_matches_equality() {
        let mut ids = HashSet::new();
        ids.insert(ProductId::from(5));
        assert!(ids.contains(&ProductId::from("5")));
        assert!(!ids.insert(ProductId::from(" 5")));
    }

    #[test]
    fn test_id_parse() {
        let id: ProductId = "12".parse().unwrap();
        assert!(matches!(id, ProductId::Number(12)));

        let id: ProductId = " sku-9 ".parse().unwrap();
        assert!(matches!(id, ProductId::Text(ref s) if s == "sku-9"));
    }

    #[test]
    fn test_id_serialization_keeps_form() {
        assert_eq!(serde_json::to_value(ProductId::from(3)).unwrap(), json!(3));
        assert_eq!(
            serde_json::to_value(ProductId::from("3")).unwrap(),
            json!("3")
        );
    }

    #[test]
    fn test_product_round_trips_unknown_fields() {
        let raw = json!({
            "id": 1,
            "title": "Essence Mascara",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "brand": "Essence",
            "stock": 5
        });

        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(product.discount_percentage, 7.17);
        assert_eq!(product.extra.get("brand"), Some(&json!("Essence")));

        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn test_cart_line_shape() {
        let line = CartLine::from_product(&Product::new(1, "Product 1", 10.0), 2);
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["id"], json!(1));
        assert_eq!(value["quantity"], json!(2));
        assert_eq!(line.subtotal(), 20.0);
    }
}
