use crate::{
    commands::Command,
    db::DbPool,
    entities::{wishlist_share, WishlistRole},
    errors::ServiceError,
    events::EventSender,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareWishlistCommand {
    pub wishlist_id: Uuid,
    pub actor: Option<Uuid>,
    pub grantee: Uuid,
    pub role: WishlistRole,
}

#[async_trait]
impl Command for ShareWishlistCommand {
    type Result = wishlist_share::Model;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        super::service(db_pool, event_sender)
            .share_wishlist(self.wishlist_id, self.actor, self.grantee, self.role)
            .await
    }
}
