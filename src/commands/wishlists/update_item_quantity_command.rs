use crate::{
    commands::Command, db::DbPool, entities::wishlist_item, errors::ServiceError,
    events::EventSender,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateItemQuantityCommand {
    pub wishlist_id: Uuid,
    pub item_id: Uuid,
    pub actor: Option<Uuid>,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
}

#[async_trait]
impl Command for UpdateItemQuantityCommand {
    type Result = wishlist_item::Model;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(ServiceError::from)?;

        super::service(db_pool, event_sender)
            .update_item_quantity(self.wishlist_id, self.item_id, self.actor, self.quantity)
            .await
    }
}
