use crate::{commands::Command, db::DbPool, errors::ServiceError, events::EventSender};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Login-time reconciliation: folds the items of a session-scoped guest
/// wishlist into the customer's default wishlist and discards the guest
/// list. Duplicates resolve in favor of the higher quantity, with the
/// customer's pre-existing item winning ties.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergeGuestWishlistCommand {
    pub guest_wishlist_id: Uuid,
    pub customer_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MergeGuestWishlistResult {
    pub guest_wishlist_id: Uuid,
    pub target_wishlist_id: Uuid,
    pub merged: usize,
    pub skipped: usize,
    pub total_items: usize,
}

#[async_trait]
impl Command for MergeGuestWishlistCommand {
    type Result = MergeGuestWishlistResult;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let outcome = super::service(db_pool, event_sender)
            .merge_guest_wishlist(self.guest_wishlist_id, self.customer_id)
            .await?;

        Ok(MergeGuestWishlistResult {
            guest_wishlist_id: self.guest_wishlist_id,
            target_wishlist_id: outcome.target_wishlist_id,
            merged: outcome.result.merged,
            skipped: outcome.result.skipped,
            total_items: outcome.result.items.len(),
        })
    }
}
