//! Guest-to-customer wishlist item reconciliation.
//!
//! Pure, synchronous, allocation-only logic: the caller loads both item
//! collections, calls [`merge_items`], and persists the winning set inside
//! its own transaction.

use crate::entities::wishlist_item;
use crate::errors::ServiceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Product identity within a wishlist: one item per key per list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    pub product_id: Uuid,
    pub variant_id: Uuid,
}

/// A wishlist item detached from its row identity, as consumed and produced
/// by the merge. Quantity is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeItem {
    pub product_id: Uuid,
    pub variant_id: Uuid,
    pub quantity: i32,
    pub note: Option<String>,
    pub price_alert_threshold: Option<Decimal>,
}

impl MergeItem {
    /// Builds a merge item, rejecting non-positive quantities. Callers are
    /// expected to have validated upstream; a failure here is a contract
    /// violation, not a recoverable condition.
    pub fn new(
        product_id: Uuid,
        variant_id: Uuid,
        quantity: i32,
        note: Option<String>,
        price_alert_threshold: Option<Decimal>,
    ) -> Result<Self, ServiceError> {
        if quantity <= 0 {
            return Err(ServiceError::ValidationError(format!(
                "Item quantity must be positive, got {}",
                quantity
            )));
        }
        Ok(Self {
            product_id,
            variant_id,
            quantity,
            note,
            price_alert_threshold,
        })
    }

    pub fn key(&self) -> ProductKey {
        ProductKey {
            product_id: self.product_id,
            variant_id: self.variant_id,
        }
    }
}

impl From<&wishlist_item::Model> for MergeItem {
    fn from(model: &wishlist_item::Model) -> Self {
        Self {
            product_id: model.product_id,
            variant_id: model.variant_id,
            quantity: model.quantity,
            note: model.note.clone(),
            price_alert_threshold: model.price_alert_threshold,
        }
    }
}

/// Outcome of a single merge call. Immutable; `merged + skipped` always
/// equals the number of source items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub items: Vec<MergeItem>,
    pub merged: usize,
    pub skipped: usize,
}

/// Merges `source` (guest) items into `target` (customer) items.
///
/// Target items keep their relative order; genuinely new source items append
/// in source order. When both sides carry the same product identity the item
/// with the greater quantity wins, and the pre-existing target item is
/// authoritative on ties.
///
/// A duplicated identity inside `source` violates the per-wishlist
/// uniqueness invariant upstream; rather than failing, the last-seen source
/// item for that identity is the one merged against the target and earlier
/// occurrences count as skipped.
pub fn merge_items(target: &[MergeItem], source: &[MergeItem]) -> MergeResult {
    let mut items: Vec<MergeItem> = target.to_vec();
    let mut index: HashMap<ProductKey, usize> = items
        .iter()
        .enumerate()
        .map(|(pos, item)| (item.key(), pos))
        .collect();

    let mut last_seen: HashMap<ProductKey, usize> = HashMap::new();
    for (pos, item) in source.iter().enumerate() {
        last_seen.insert(item.key(), pos);
    }

    let mut merged = 0;
    let mut skipped = 0;

    for (pos, item) in source.iter().enumerate() {
        if last_seen[&item.key()] != pos {
            // superseded by a later duplicate in the source
            skipped += 1;
            continue;
        }

        match index.get(&item.key()) {
            None => {
                index.insert(item.key(), items.len());
                items.push(item.clone());
                merged += 1;
            }
            Some(&existing) => {
                if item.quantity > items[existing].quantity {
                    items[existing] = item.clone();
                    merged += 1;
                } else {
                    skipped += 1;
                }
            }
        }
    }

    MergeResult {
        items,
        merged,
        skipped,
    }
}
