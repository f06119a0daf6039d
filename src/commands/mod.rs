use crate::{db::DbPool, errors::ServiceError, events::EventSender};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod wishlists;

pub use wishlists::{
    AddWishlistItemCommand, CreateWishlistCommand, DeleteWishlistCommand,
    MergeGuestWishlistCommand, RemoveWishlistItemCommand, RevokeShareCommand,
    SetDefaultWishlistCommand, ShareWishlistCommand, UpdateItemQuantityCommand,
    UpdateWishlistCommand,
};

/// Command trait for implementing the Command Pattern
///
/// Encapsulates the logic needed to execute a business operation into a
/// single object that can be validated, executed, and produce events.
#[async_trait]
pub trait Command: Send + Sync {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command with the given dependencies
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError>;
}

/// Every wishlist command as a tagged variant.
///
/// Dispatch is an explicit match from variant to handler rather than any
/// name-based handler lookup, so the full command surface is visible (and
/// checked) in one place.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WishlistCommand {
    CreateWishlist(CreateWishlistCommand),
    UpdateWishlist(UpdateWishlistCommand),
    DeleteWishlist(DeleteWishlistCommand),
    SetDefaultWishlist(SetDefaultWishlistCommand),
    AddWishlistItem(AddWishlistItemCommand),
    UpdateItemQuantity(UpdateItemQuantityCommand),
    RemoveWishlistItem(RemoveWishlistItemCommand),
    ShareWishlist(ShareWishlistCommand),
    RevokeShare(RevokeShareCommand),
    MergeGuestWishlist(MergeGuestWishlistCommand),
}

impl WishlistCommand {
    /// Routes the command to its handler and serializes the result.
    pub async fn dispatch(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<serde_json::Value, ServiceError> {
        fn to_value<T: serde::Serialize>(value: T) -> Result<serde_json::Value, ServiceError> {
            serde_json::to_value(value)
                .map_err(|e| ServiceError::InternalError(format!("Result serialization: {}", e)))
        }

        match self {
            Self::CreateWishlist(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::UpdateWishlist(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::DeleteWishlist(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::SetDefaultWishlist(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::AddWishlistItem(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::UpdateItemQuantity(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::RemoveWishlistItem(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::ShareWishlist(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::RevokeShare(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
            Self::MergeGuestWishlist(cmd) => to_value(cmd.execute(db_pool, event_sender).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn commands_deserialize_by_tag() {
        let json = format!(
            r#"{{
                "type": "merge_guest_wishlist",
                "guest_wishlist_id": "{}",
                "customer_id": "{}"
            }}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );

        let cmd: WishlistCommand =
            serde_json::from_str(&json).expect("command should deserialize");
        assert!(matches!(cmd, WishlistCommand::MergeGuestWishlist(_)));
    }

    #[test]
    fn unknown_command_tag_is_rejected() {
        let json = r#"{"type": "drop_all_wishlists"}"#;
        assert!(serde_json::from_str::<WishlistCommand>(json).is_err());
    }
}
