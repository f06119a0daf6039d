use crate::{commands::Command, db::DbPool, errors::ServiceError, events::EventSender};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RevokeShareCommand {
    pub wishlist_id: Uuid,
    pub actor: Option<Uuid>,
    pub grantee: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevokeShareResult {
    pub wishlist_id: Uuid,
    pub revoked_customer_id: Uuid,
}

#[async_trait]
impl Command for RevokeShareCommand {
    type Result = RevokeShareResult;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        super::service(db_pool, event_sender)
            .revoke_share(self.wishlist_id, self.actor, self.grantee)
            .await?;

        Ok(RevokeShareResult {
            wishlist_id: self.wishlist_id,
            revoked_customer_id: self.grantee,
        })
    }
}
