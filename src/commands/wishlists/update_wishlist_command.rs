use crate::{
    commands::Command,
    db::DbPool,
    entities::{wishlist, WishlistVisibility},
    errors::ServiceError,
    events::EventSender,
    services::wishlist::UpdateWishlistInput,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateWishlistCommand {
    pub wishlist_id: Uuid,
    /// Authenticated customer performing the update, if any.
    pub actor: Option<Uuid>,
    #[validate(length(min = 1, max = 255, message = "Wishlist name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<WishlistVisibility>,
}

#[async_trait]
impl Command for UpdateWishlistCommand {
    type Result = wishlist::Model;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(ServiceError::from)?;

        super::service(db_pool, event_sender)
            .update_wishlist(
                self.wishlist_id,
                self.actor,
                UpdateWishlistInput {
                    name: self.name.clone(),
                    description: self.description.clone(),
                    visibility: self.visibility,
                },
            )
            .await
    }
}
