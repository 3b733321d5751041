//! # Product Lookup
//!
//! Resolves identifiers coming back from the UI layer against the current
//! product list.

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};

/// Returns the first product whose id equals `id`.
///
/// Text and numeric ids compare equal when they denote the same integer,
/// so an id read from a markup attribute finds a product stored with a
/// numeric id.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::find_product;
/// use storefront_core::{Product, ProductId};
///
/// let products = vec![Product::new(1, "Product 1", 10.0)];
/// assert!(find_product(&products, &ProductId::from("1")).is_some());
/// assert!(find_product(&products, &ProductId::from(2)).is_none());
/// ```
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| &product.id == id)
}

/// Like [`find_product`], but reports a missing product as an error.
pub fn require_product<'a>(products: &'a [Product], id: &ProductId) -> CoreResult<&'a Product> {
    find_product(products, id).ok_or_else(|| CoreError::ProductNotFound(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Product 1", 10.0),
            Product::new(2, "Product 2", 20.0),
            Product::new("sku-3", "Product 3", 30.0),
        ]
    }

    #[test]
    fn test_find_by_number_and_text() {
        let products = products();

        let by_number = find_product(&products, &ProductId::from(2)).unwrap();
        let by_text = find_product(&products, &ProductId::from("2")).unwrap();

        assert_eq!(by_number.title, "Product 2");
        assert_eq!(by_text, by_number);
    }

    #[test]
    fn test_find_text_only_id() {
        let products = products();
        let found = find_product(&products, &ProductId::from("sku-3")).unwrap();
        assert_eq!(found.price, 30.0);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut products = products();
        products.push(Product::new(1, "Duplicate", 0.0));

        let found = find_product(&products, &ProductId::from(1)).unwrap();
        assert_eq!(found.title, "Product 1");
    }

    #[test]
    fn test_missing_product() {
        let products = products();
        assert!(find_product(&products, &ProductId::from(99)).is_none());

        let err = require_product(&products, &ProductId::from(99)).unwrap_err();
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_ignores_number_or_text_form(
                ids in prop::collection::vec(0i64..500, 0..30),
                n in 0i64..600,
            ) {
                let products: Vec<Product> = ids
                    .iter()
                    .enumerate()
                    .map(|(i, id)| Product::new(*id, format!("Product {}", i), 1.0))
                    .collect();

                let by_number = find_product(&products, &ProductId::from(n));
                let by_text = find_product(&products, &ProductId::from(n.to_string()));

                prop_assert_eq!(by_number, by_text);
                prop_assert_eq!(by_number.is_some(), ids.contains(&n));
            }
        }
    }
}
