use crate::{
    commands::Command,
    db::DbPool,
    entities::{wishlist, WishlistVisibility},
    errors::ServiceError,
    events::EventSender,
    services::wishlist::CreateWishlistInput,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateWishlistCommand {
    pub customer_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Wishlist name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub visibility: Option<WishlistVisibility>,
}

#[async_trait]
impl Command for CreateWishlistCommand {
    type Result = wishlist::Model;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(|e| {
            let msg = format!("Invalid input: {}", e);
            error!("{}", msg);
            ServiceError::ValidationError(msg)
        })?;

        super::service(db_pool, event_sender)
            .create_wishlist(CreateWishlistInput {
                customer_id: self.customer_id,
                name: self.name.clone(),
                description: self.description.clone(),
                visibility: self.visibility,
            })
            .await
    }
}
