use crate::{commands::Command, db::DbPool, errors::ServiceError, events::EventSender};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteWishlistCommand {
    pub wishlist_id: Uuid,
    pub actor: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteWishlistResult {
    pub deleted_wishlist_id: Uuid,
}

#[async_trait]
impl Command for DeleteWishlistCommand {
    type Result = DeleteWishlistResult;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        super::service(db_pool, event_sender)
            .delete_wishlist(self.wishlist_id, self.actor)
            .await?;

        Ok(DeleteWishlistResult {
            deleted_wishlist_id: self.wishlist_id,
        })
    }
}
