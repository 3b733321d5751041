//! # Wishlist Toggle
//!
//! The wishlist is a membership set kept in insertion order. There is no
//! quantity: clicking the heart on a product either adds or removes it.
//!
//! ```text
//! toggle_item([A, B], C) ──► ([A, B, C], Added)
//! toggle_item([A, B, C], B) ──► ([A, C], Removed)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, WishlistEntry};

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Result of [`toggle_item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggled {
    pub updated_list: Vec<WishlistEntry>,
    pub action: ToggleAction,
}

/// Adds `product` to the wishlist if absent, removes it if present.
///
/// ## Behavior
/// - Present: every entry with the same id is dropped, the rest keep their
///   relative order, action is [`ToggleAction::Removed`]
/// - Absent: appended at the end, action is [`ToggleAction::Added`]
///
/// Two toggles with a product that was absent return the original list. Starting
/// from a present product, the second toggle appends it at the end.
pub fn toggle_item(wishlist: &[WishlistEntry], product: &Product) -> Toggled {
    if wishlist.iter().any(|entry| entry.id == product.id) {
        Toggled {
            updated_list: wishlist
                .iter()
                .filter(|entry| entry.id != product.id)
                .cloned()
                .collect(),
            action: ToggleAction::Removed,
        }
    } else {
        let mut updated_list = wishlist.to_vec();
        updated_list.push(product.clone());
        Toggled {
            updated_list,
            action: ToggleAction::Added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let wishlist = vec![Product::new(1, "Product 1", 10.0)];
        let product = Product::new(2, "Product 2", 20.0);

        let first = toggle_item(&wishlist, &product);
        assert_eq!(first.action, ToggleAction::Added);
        assert_eq!(
            first.updated_list,
            vec![Product::new(1, "Product 1", 10.0), product.clone()]
        );

        let second = toggle_item(&first.updated_list, &product);
        assert_eq!(second.action, ToggleAction::Removed);
        assert_eq!(second.updated_list, wishlist);
    }

    #[test]
    fn test_toggle_remove_preserves_order() {
        let wishlist = vec![
            Product::new(1, "A", 1.0),
            Product::new(2, "B", 2.0),
            Product::new(3, "C", 3.0),
        ];

        let toggled = toggle_item(&wishlist, &Product::new("2", "B", 2.0));

        assert_eq!(toggled.action, ToggleAction::Removed);
        let titles: Vec<_> = toggled.updated_list.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_toggle_action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ToggleAction::Added).unwrap(),
            serde_json::json!("added")
        );
        assert_eq!(
            serde_json::to_value(ToggleAction::Removed).unwrap(),
            serde_json::json!("removed")
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn wishlist_strategy() -> impl Strategy<Value = Vec<WishlistEntry>> {
            prop::collection::btree_set(0i64..1000, 0..20).prop_map(|ids| {
                ids.into_iter()
                    .map(|id| Product::new(id, format!("Product {}", id), id as f64))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn toggling_absent_product_twice_restores_wishlist(
                wishlist in wishlist_strategy(),
                id in 1000i64..2000,
            ) {
                let product = Product::new(id, "New", 1.0);

                let first = toggle_item(&wishlist, &product);
                prop_assert_eq!(first.action, ToggleAction::Added);
                prop_assert_eq!(first.updated_list.len(), wishlist.len() + 1);

                let second = toggle_item(&first.updated_list, &product);
                prop_assert_eq!(second.action, ToggleAction::Removed);
                prop_assert_eq!(second.updated_list, wishlist);
            }

            #[test]
            fn toggling_present_product_twice_keeps_membership(
                wishlist in wishlist_strategy().prop_filter("non-empty", |w| !w.is_empty()),
                pick in any::<prop::sample::Index>(),
            ) {
                let product = wishlist[pick.index(wishlist.len())].clone();

                let first = toggle_item(&wishlist, &product);
                prop_assert_eq!(first.action, ToggleAction::Removed);
                prop_assert!(first.updated_list.iter().all(|p| p.id != product.id));

                let second = toggle_item(&first.updated_list, &product);
                prop_assert_eq!(second.action, ToggleAction::Added);
                prop_assert_eq!(second.updated_list.len(), wishlist.len());
                for entry in &wishlist {
                    prop_assert!(second.updated_list.contains(entry));
                }
            }
        }
    }
}
