use crate::{
    commands::Command, db::DbPool, entities::wishlist, errors::ServiceError, events::EventSender,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Reassigns the owner's default wishlist. The previous default is cleared
/// in the same transaction, preserving the one-default-per-owner invariant.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetDefaultWishlistCommand {
    pub wishlist_id: Uuid,
    pub actor: Option<Uuid>,
}

#[async_trait]
impl Command for SetDefaultWishlistCommand {
    type Result = wishlist::Model;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        super::service(db_pool, event_sender)
            .set_default_wishlist(self.wishlist_id, self.actor)
            .await
    }
}
