use crate::{
    commands::Command,
    db::DbPool,
    entities::wishlist_item,
    errors::ServiceError,
    events::EventSender,
    services::wishlist::AddItemInput,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AddWishlistItemCommand {
    pub wishlist_id: Uuid,
    pub actor: Option<Uuid>,
    pub product_id: Uuid,
    pub variant_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    pub note: Option<String>,
    pub price_alert_threshold: Option<Decimal>,
}

#[async_trait]
impl Command for AddWishlistItemCommand {
    type Result = wishlist_item::Model;

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
            .add_item(
                self.wishlist_id,
                self.actor,
                AddItemInput {
                    product_id: self.product_id,
                    variant_id: self.variant_id,
                    quantity: self.quantity,
                    note: self.note.clone(),
                    price_alert_threshold: self.price_alert_threshold,
                },
            )
            .await
    }
}
