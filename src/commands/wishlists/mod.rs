pub mod add_item_command;
pub mod create_wishlist_command;
pub mod delete_wishlist_command;
pub mod merge_guest_wishlist_command;
pub mod remove_item_command;
pub mod revoke_share_command;
pub mod set_default_wishlist_command;
pub mod share_wishlist_command;
pub mod update_item_quantity_command;
pub mod update_wishlist_command;

pub use add_item_command::AddWishlistItemCommand;
pub use create_wishlist_command::CreateWishlistCommand;
pub use delete_wishlist_command::DeleteWishlistCommand;
pub use merge_guest_wishlist_command::{MergeGuestWishlistCommand, MergeGuestWishlistResult};
pub use remove_item_command::RemoveWishlistItemCommand;
pub use revoke_share_command::RevokeShareCommand;
pub use set_default_wishlist_command::SetDefaultWishlistCommand;
pub use share_wishlist_command::ShareWishlistCommand;
pub use update_item_quantity_command::UpdateItemQuantityCommand;
pub use update_wishlist_command::UpdateWishlistCommand;

use crate::{config::AppConfig, db::DbPool, events::EventSender, services::WishlistService};
use std::sync::Arc;

/// Builds the service a wishlist command runs against. Commands carry no
/// configuration of their own, so the defaults apply.
fn service(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> WishlistService {
    WishlistService::new(db_pool, event_sender, Arc::new(AppConfig::default()))
}
