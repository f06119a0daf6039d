use crate::{commands::Command, db::DbPool, errors::ServiceError, events::EventSender};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveWishlistItemCommand {
    pub wishlist_id: Uuid,
    pub item_id: Uuid,
    pub actor: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveWishlistItemResult {
    pub wishlist_id: Uuid,
    pub removed_item_id: Uuid,
}

#[async_trait]
impl Command for RemoveWishlistItemCommand {
    type Result = RemoveWishlistItemResult;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        super::service(db_pool, event_sender)
            .remove_item(self.wishlist_id, self.item_id, self.actor)
            .await?;

        Ok(RemoveWishlistItemResult {
            wishlist_id: self.wishlist_id,
            removed_item_id: self.item_id,
        })
    }
}
