//! Property-based tests for the wishlist merge kernel.
//!
//! These verify the merge invariants across a wide range of generated item
//! collections, including the degenerate case of duplicated product
//! identities inside the source collection.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;
use wishlist_api::services::wishlist::{merge_items, MergeItem, ProductKey};

/// A small product pool so that generated collections actually collide.
fn product_id(index: u8) -> Uuid {
    Uuid::from_u128(1 + index as u128)
}

fn item_strategy() -> impl Strategy<Value = MergeItem> {
    (0u8..6, 1i32..50).prop_map(|(index, quantity)| {
        MergeItem::new(product_id(index), Uuid::nil(), quantity, None, None)
            .expect("generated item is valid")
    })
}

/// Arbitrary item list; may contain duplicate product identities.
fn items_strategy() -> impl Strategy<Value = Vec<MergeItem>> {
    prop::collection::vec(item_strategy(), 0..12)
}

/// Item list with unique product identities, as the per-wishlist invariant
/// guarantees for persisted wishlists.
fn unique_items_strategy() -> impl Strategy<Value = Vec<MergeItem>> {
    prop::collection::hash_map(0u8..6, 1i32..50, 0..6).prop_map(|by_index| {
        by_index
            .into_iter()
            .map(|(index, quantity)| {
                MergeItem::new(product_id(index), Uuid::nil(), quantity, None, None)
                    .expect("generated item is valid")
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn counts_always_total_source_length(
        target in unique_items_strategy(),
        source in items_strategy(),
    ) {
        let result = merge_items(&target, &source);
        prop_assert_eq!(result.merged + result.skipped, source.len());
    }

    #[test]
    fn result_has_one_item_per_identity(
        target in unique_items_strategy(),
        source in items_strategy(),
    ) {
        let result = merge_items(&target, &source);
        let keys: HashSet<ProductKey> = result.items.iter().map(MergeItem::key).collect();
        prop_assert_eq!(keys.len(), result.items.len());
    }

    #[test]
    fn winning_quantity_is_never_below_either_side(
        target in unique_items_strategy(),
        source in unique_items_strategy(),
    ) {
        let result = merge_items(&target, &source);
        let by_key: HashMap<ProductKey, i32> = result
            .items
            .iter()
            .map(|item| (item.key(), item.quantity))
            .collect();

        for side in [&target, &source] {
            for item in side.iter() {
                let winner = by_key.get(&item.key()).copied();
                prop_assert!(winner.is_some(), "identity missing from result");
                prop_assert!(winner.unwrap() >= item.quantity);
            }
        }
    }

    #[test]
    fn winner_quantity_is_max_of_both_sides(
        target in unique_items_strategy(),
        source in unique_items_strategy(),
    ) {
        let result = merge_items(&target, &source);
        let target_qty: HashMap<ProductKey, i32> =
            target.iter().map(|i| (i.key(), i.quantity)).collect();
        let source_qty: HashMap<ProductKey, i32> =
            source.iter().map(|i| (i.key(), i.quantity)).collect();

        for item in &result.items {
            let qa = target_qty.get(&item.key()).copied();
            let qb = source_qty.get(&item.key()).copied();
            let expected = qa.unwrap_or(i32::MIN).max(qb.unwrap_or(i32::MIN));
            prop_assert_eq!(item.quantity, expected);
        }
    }

    #[test]
    fn merge_is_idempotent_on_item_set(
        target in unique_items_strategy(),
        source in unique_items_strategy(),
    ) {
        let first = merge_items(&target, &source);
        let second = merge_items(&first.items, &source);
        prop_assert_eq!(&second.items, &first.items);
        // a repeated merge never wins anything new
        prop_assert_eq!(second.merged, 0);
        prop_assert_eq!(second.skipped, source.len());
    }

    #[test]
    fn empty_source_is_identity(target in unique_items_strategy()) {
        let result = merge_items(&target, &[]);
        prop_assert_eq!(&result.items, &target);
        prop_assert_eq!(result.merged, 0);
        prop_assert_eq!(result.skipped, 0);
    }

    #[test]
    fn target_order_is_preserved_as_prefix(
        target in unique_items_strategy(),
        source in unique_items_strategy(),
    ) {
        let result = merge_items(&target, &source);
        prop_assert!(result.items.len() >= target.len());
        for (pos, original) in target.iter().enumerate() {
            prop_assert_eq!(result.items[pos].key(), original.key());
        }
    }
}
