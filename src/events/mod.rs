use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Handle for publishing domain events from services and commands.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event, surfacing channel failures to the caller.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Sends an event and logs on failure. Used on paths where the primary
    /// mutation has already committed and event delivery is best-effort.
    pub async fn send_or_log(&self, event: Event) {
        if let Err(e) = self.send(event.clone()).await {
            warn!("Dropping event {:?}: {}", event, e);
        }
    }
}

/// Domain events emitted by wishlist operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    WishlistCreated(Uuid),
    WishlistUpdated(Uuid),
    WishlistDeleted(Uuid),
    DefaultWishlistChanged {
        customer_id: Uuid,
        wishlist_id: Uuid,
    },

    WishlistItemAdded {
        wishlist_id: Uuid,
        item_id: Uuid,
        product_id: Uuid,
        variant_id: Uuid,
    },
    WishlistItemQuantityChanged {
        wishlist_id: Uuid,
        item_id: Uuid,
        old_quantity: i32,
        new_quantity: i32,
    },
    WishlistItemRemoved {
        wishlist_id: Uuid,
        item_id: Uuid,
    },

    WishlistShared {
        wishlist_id: Uuid,
        customer_id: Uuid,
        role: String,
    },
    WishlistShareRevoked {
        wishlist_id: Uuid,
        customer_id: Uuid,
    },

    /// Emitted once per guest-to-customer merge; the counts feed the
    /// optional audit/analytics collaborator.
    GuestWishlistMerged {
        guest_wishlist_id: Uuid,
        target_wishlist_id: Uuid,
        merged: usize,
        skipped: usize,
    },
}

/// Consumes events from the channel and dispatches them. Runs until every
/// sender is dropped.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::GuestWishlistMerged {
                guest_wishlist_id,
                target_wishlist_id,
                merged,
                skipped,
            } => {
                if let Err(e) =
                    handle_guest_wishlist_merged(*guest_wishlist_id, *target_wishlist_id, *merged, *skipped)
                        .await
                {
                    error!(
                        "Failed to handle merge event: guest_wishlist_id={}, error={}",
                        guest_wishlist_id, e
                    );
                }
            }
            Event::WishlistDeleted(wishlist_id) => {
                info!("Wishlist deleted: {}", wishlist_id);
            }
            Event::DefaultWishlistChanged {
                customer_id,
                wishlist_id,
            } => {
                info!(
                    "Default wishlist for customer {} is now {}",
                    customer_id, wishlist_id
                );
            }
            _ => {
                info!("No specific handler for event: {:?}", event);
            }
        }
    }

    warn!("Event processing loop has ended");
}

/// Records merge outcomes for reporting. Audit persistence lives with the
/// host platform; this crate only logs the counts.
async fn handle_guest_wishlist_merged(
    guest_wishlist_id: Uuid,
    target_wishlist_id: Uuid,
    merged: usize,
    skipped: usize,
) -> Result<(), String> {
    info!(
        guest_wishlist_id = %guest_wishlist_id,
        target_wishlist_id = %target_wishlist_id,
        merged,
        skipped,
        "Guest wishlist merged into customer wishlist"
    );
    Ok(())
}
