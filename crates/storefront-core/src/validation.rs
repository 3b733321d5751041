//! # Validation Module
//!
//! Normalization of raw product records into [`Product`] values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Record Normalization                               │
//! │                                                                         │
//! │  raw JSON (object or array of objects)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_products ── non-object element? ── skip + warn               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_product                                                      │
//! │  ├── id            number or text, required                            │
//! │  ├── rating        number / numeric text, else 0                       │
//! │  ├── discount      number / numeric text, else 0                       │
//! │  ├── thumbnail     `thumbnail`, falling back to `image`                │
//! │  ├── price         passed through (negative prices allowed)            │
//! │  └── everything else kept in `extra`                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation only fills in defaults; it never tightens the data. A product
//! with a negative price comes out with the same negative price.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use storefront_core::validation::validate_products;
//!
//! let products = validate_products(&json!({ "id": 2, "title": "Product 2", "price": -5 }));
//! assert_eq!(products.len(), 1);
//! assert_eq!(products[0].rating, 0.0);
//! assert_eq!(products[0].price, -5.0);
//! ```

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};

/// Keys mapped onto named [`Product`] fields; everything else goes to `extra`.
const MODELLED_KEYS: &[&str] = &[
    "id",
    "title",
    "price",
    "description",
    "thumbnail",
    "rating",
    "discountPercentage",
    "category",
    "returnPolicy",
];

/// Normalizes one record or a sequence of records.
///
/// Always returns a sequence: a single object yields a one-element vector.
/// Elements that cannot become a product (not an object, no usable id) are
/// skipped and logged.
pub fn validate_products(input: &Value) -> Vec<Product> {
    let records: Vec<&Value> = match input {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match validate_product(record) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "Skipping product record");
                None
            }
        })
        .collect()
}

/// Normalizes a single record.
pub fn validate_product(record: &Value) -> CoreResult<Product> {
    let map = record.as_object().ok_or_else(|| CoreError::InvalidRecord {
        reason: "expected an object".to_string(),
    })?;

    let id = parse_id(map.get("id"))?;

    let price = match map.get("price") {
        None | Some(Value::Null) => 0.0,
        Some(value) => coerce_number(value).unwrap_or_else(|| {
            warn!(%id, ?value, "Non-numeric price, using 0");
            0.0
        }),
    };

    let extra: Map<String, Value> = map
        .iter()
        .filter(|(key, _)| !MODELLED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(Product {
        id,
        title: text(map.get("title")).unwrap_or_default(),
        price,
        description: text(map.get("description")),
        thumbnail: text(map.get("thumbnail")).or_else(|| text(map.get("image"))),
        rating: map.get("rating").and_then(coerce_number).unwrap_or(0.0),
        discount_percentage: map
            .get("discountPercentage")
            .and_then(coerce_number)
            .unwrap_or(0.0),
        category: text(map.get("category")),
        return_policy: text(map.get("returnPolicy")),
        extra,
    })
}

fn parse_id(value: Option<&Value>) -> CoreResult<ProductId> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(ProductId::Number)
            .ok_or_else(|| CoreError::InvalidRecord {
                reason: format!("id {} is not an integer", n),
            }),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(ProductId::Text(s.clone())),
        _ => Err(CoreError::InvalidRecord {
            reason: "missing id".to_string(),
        }),
    }
}

/// Reads a finite number from a JSON number or numeric text.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_product_preserved() {
        let validated = validate_products(&json!([{
            "id": 1,
            "title": "Product 1",
            "price": 10,
            "description": "A great product",
            "thumbnail": "image.jpg",
            "rating": 4.5,
            "discountPercentage": 10
        }]));

        assert_eq!(validated.len(), 1);
        let p = &validated[0];
        assert_eq!(p.discount_percentage, 10.0);
        assert_eq!(p.rating, 4.5);
        assert_eq!(p.thumbnail.as_deref(), Some("image.jpg"));
        assert_eq!(p.description.as_deref(), Some("A great product"));
        assert_eq!(p.price, 10.0);
    }

    #[test]
    fn test_single_record_defaults() {
        let validated = validate_products(&json!({
            "id": 2,
            "title": "Product 2",
            "price": -5,
            "description": "A great product",
            "category": "Electronics",
            "image": "image.jpg"
        }));

        assert_eq!(validated.len(), 1);
        let p = &validated[0];
        assert_eq!(p.discount_percentage, 0.0);
        assert_eq!(p.rating, 0.0);
        assert_eq!(p.thumbnail.as_deref(), Some("image.jpg"));
        assert_eq!(p.description.as_deref(), Some("A great product"));
        assert_eq!(p.category.as_deref(), Some("Electronics"));
        // Negative prices pass through
        assert_eq!(p.price, -5.0);
        // `image` itself is kept
        assert_eq!(p.extra.get("image"), Some(&json!("image.jpg")));
    }

    #[test]
    fn test_invalid_numbers_default_to_zero() {
        let p = validate_product(&json!({
            "id": 3,
            "rating": "not a number",
            "discountPercentage": null
        }))
        .unwrap();

        assert_eq!(p.rating, 0.0);
        assert_eq!(p.discount_percentage, 0.0);
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        let p = validate_product(&json!({
            "id": "4",
            "rating": "3.7",
            "discountPercentage": " 12.5 "
        }))
        .unwrap();

        assert_eq!(p.rating, 3.7);
        assert_eq!(p.discount_percentage, 12.5);
        assert_eq!(p.id, ProductId::from(4));
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let validated = validate_products(&json!([
            { "title": "No id" },
            "not an object",
            { "id": 5, "title": "Kept" }
        ]));

        assert_eq!(validated.len(), 1);
        assert_eq!(validated[0].title, "Kept");
    }

    #[test]
    fn test_unknown_fields_kept() {
        let p = validate_product(&json!({
            "id": 6,
            "brand": "Acme",
            "stock": 12,
            "returnPolicy": "30 days return policy"
        }))
        .unwrap();

        assert_eq!(p.extra.get("brand"), Some(&json!("Acme")));
        assert_eq!(p.extra.get("stock"), Some(&json!(12)));
        assert!(!p.extra.contains_key("returnPolicy"));
        assert_eq!(p.return_policy.as_deref(), Some("30 days return policy"));
    }

    #[test]
    fn test_invalid_record_errors() {
        assert!(validate_product(&json!(42)).is_err());
        assert!(validate_product(&json!({ "id": 1.5 })).is_err());
        assert!(validate_product(&json!({ "id": "  " })).is_err());
    }
}
