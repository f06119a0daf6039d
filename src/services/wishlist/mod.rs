use crate::{
    config::AppConfig,
    entities::{
        wishlist, wishlist_item, wishlist_share, Wishlist, WishlistItem, WishlistRole,
        WishlistShare, WishlistVisibility,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

pub mod merge;
pub mod visibility;

pub use merge::{merge_items, MergeItem, MergeResult, ProductKey};

/// Name given to the default wishlist created implicitly during a guest
/// merge when the customer has none.
const DEFAULT_WISHLIST_NAME: &str = "My wishlist";

/// Wishlist service for managing customer and guest wishlists.
///
/// Provides wishlist lifecycle management (create, update, delete, default
/// reassignment), item operations under the per-wishlist product-uniqueness
/// invariant, share-grant management, visibility-gated reads, and the
/// login-time guest-to-customer merge flow.
///
/// All mutating operations run inside a database transaction and publish a
/// domain event after commit. Permission decisions are delegated to the
/// pure [`visibility`] checks; item reconciliation is delegated to the pure
/// [`merge`] module.
#[derive(Clone)]
pub struct WishlistService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
    config: Arc<AppConfig>,
}

impl WishlistService {
    pub fn new(
        db: Arc<DatabaseConnection>,
        event_sender: Arc<EventSender>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            db,
            event_sender,
            config,
        }
    }

    /// Creates a wishlist for a customer.
    ///
    /// The customer's first wishlist automatically becomes their default.
    /// Publishes `WishlistCreated` on success.
    #[instrument(skip(self))]
    pub async fn create_wishlist(
        &self,
        input: CreateWishlistInput,
    ) -> Result<wishlist::Model, ServiceError> {
        input.validate()?;

        let txn = self.db.begin().await?;

        let existing = Wishlist::find()
            .filter(wishlist::Column::CustomerId.eq(Some(input.customer_id)))
            .count(&txn)
            .await?;

        let wishlist_id = Uuid::new_v4();
        let now = Utc::now();
        let visibility = input.visibility.unwrap_or(WishlistVisibility::Private);

        let model = wishlist::ActiveModel {
            id: Set(wishlist_id),
            customer_id: Set(Some(input.customer_id)),
            session_id: Set(None),
            name: Set(input.name),
            description: Set(input.description),
            visibility: Set(visibility.as_str().to_string()),
            is_default: Set(existing == 0),
            expires_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&txn).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistCreated(wishlist_id))
            .await;

        info!("Created wishlist {} for customer {}", wishlist_id, input.customer_id);
        Ok(created)
    }

    /// Creates an ephemeral guest wishlist scoped to a storefront session.
    ///
    /// Guest lists have no owner, are always private, and expire after the
    /// configured number of days unless merged into an account first.
    #[instrument(skip(self))]
    pub async fn create_guest_wishlist(
        &self,
        session_id: String,
    ) -> Result<wishlist::Model, ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Guest session id must not be empty".to_string(),
            ));
        }

        let wishlist_id = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + Duration::days(self.config.guest_wishlist_ttl_days);

        let model = wishlist::ActiveModel {
            id: Set(wishlist_id),
            customer_id: Set(None),
            session_id: Set(Some(session_id)),
            name: Set("Guest wishlist".to_string()),
            description: Set(None),
            visibility: Set(WishlistVisibility::Private.as_str().to_string()),
            is_default: Set(false),
            expires_at: Set(Some(expires_at)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::WishlistCreated(wishlist_id))
            .await;

        Ok(created)
    }

    /// Retrieves a wishlist with its items, gated by the visibility policy.
    ///
    /// # Returns
    ///
    /// * `Ok(WishlistWithItems)` - Wishlist, items, and share grants
    /// * `Err(ServiceError::NotFound)` - No such wishlist
    /// * `Err(ServiceError::Forbidden)` - Actor may not view this wishlist
    #[instrument(skip(self))]
    pub async fn get_wishlist(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
    ) -> Result<WishlistWithItems, ServiceError> {
        let (wishlist, shares) = self.load_with_shares(&*self.db, wishlist_id).await?;

        if !wishlist.is_guest() && !visibility::can_view(&wishlist, &shares, actor) {
            return Err(ServiceError::Forbidden(format!(
                "Not allowed to view wishlist {}",
                wishlist_id
            )));
        }

        let items = WishlistItem::find()
            .filter(wishlist_item::Column::WishlistId.eq(wishlist_id))
            .order_by_asc(wishlist_item::Column::AddedAt)
            .all(&*self.db)
            .await?;

        Ok(WishlistWithItems {
            wishlist,
            items,
            shares,
        })
    }

    /// Lists a customer's wishlists, newest first, with pagination.
    pub async fn list_wishlists_for_customer(
        &self,
        customer_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<wishlist::Model>, u64), ServiceError> {
        let paginator = Wishlist::find()
            .filter(wishlist::Column::CustomerId.eq(Some(customer_id)))
            .order_by_desc(wishlist::Column::CreatedAt)
            .paginate(&*self.db, per_page);

        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((data, total))
    }

    /// Renames a wishlist or changes its description/visibility. Owner only.
    #[instrument(skip(self))]
    pub async fn update_wishlist(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
        input: UpdateWishlistInput,
    ) -> Result<wishlist::Model, ServiceError> {
        input.validate()?;

        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        let mut active: wishlist::ActiveModel = wishlist.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(visibility) = input.visibility {
            active.visibility = Set(visibility.as_str().to_string());
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistUpdated(wishlist_id))
            .await;

        Ok(updated)
    }

    /// Makes the wishlist its owner's default, clearing the previous default
    /// in the same transaction so at most one default exists per customer.
    #[instrument(skip(self))]
    pub async fn set_default_wishlist(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
    ) -> Result<wishlist::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        let customer_id = wishlist.customer_id.ok_or_else(|| {
            ServiceError::InvalidOperation(
                "A guest wishlist cannot be a default wishlist".to_string(),
            )
        })?;

        // clear any previous default for this customer
        let previous_defaults = Wishlist::find()
            .filter(wishlist::Column::CustomerId.eq(Some(customer_id)))
            .filter(wishlist::Column::IsDefault.eq(true))
            .all(&txn)
            .await?;
        for previous in previous_defaults {
            if previous.id == wishlist_id {
                continue;
            }
            let mut active: wishlist::ActiveModel = previous.into();
            active.is_default = Set(false);
            active.updated_at = Set(Utc::now());
            active.update(&txn).await?;
        }

        let mut active: wishlist::ActiveModel = wishlist.into();
        active.is_default = Set(true);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::DefaultWishlistChanged {
                customer_id,
                wishlist_id,
            })
            .await;

        Ok(updated)
    }

    /// Deletes a wishlist along with its items and share grants.
    ///
    /// The owner's default wishlist can only be deleted when it is their last
    /// remaining wishlist; otherwise the default must be reassigned first.
    #[instrument(skip(self))]
    pub async fn delete_wishlist(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        if wishlist.is_default {
            if let Some(customer_id) = wishlist.customer_id {
                let others = Wishlist::find()
                    .filter(wishlist::Column::CustomerId.eq(Some(customer_id)))
                    .filter(wishlist::Column::Id.ne(wishlist_id))
                    .count(&txn)
                    .await?;
                if others > 0 {
                    return Err(ServiceError::InvalidOperation(
                        "Cannot delete the default wishlist while other wishlists exist; reassign the default first"
                            .to_string(),
                    ));
                }
            }
        }

        self.delete_wishlist_rows(&txn, wishlist_id).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistDeleted(wishlist_id))
            .await;

        info!("Deleted wishlist {}", wishlist_id);
        Ok(())
    }

    /// Adds a product to a wishlist.
    ///
    /// At most one item per `(product_id, variant_id)` may exist on a
    /// wishlist; adding a product that is already present is a conflict.
    /// Quantity changes go through [`Self::update_item_quantity`].
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
        input: AddItemInput,
    ) -> Result<wishlist_item::Model, ServiceError> {
        input.validate()?;

        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        let duplicate = WishlistItem::find()
            .filter(wishlist_item::Column::WishlistId.eq(wishlist_id))
            .filter(wishlist_item::Column::ProductId.eq(input.product_id))
            .filter(wishlist_item::Column::VariantId.eq(input.variant_id))
            .one(&txn)
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Product {} (variant {}) is already on wishlist {}",
                input.product_id, input.variant_id, wishlist_id
            )));
        }

        let item_id = Uuid::new_v4();
        let now = Utc::now();
        let item = wishlist_item::ActiveModel {
            id: Set(item_id),
            wishlist_id: Set(wishlist_id),
            product_id: Set(input.product_id),
            variant_id: Set(input.variant_id),
            quantity: Set(input.quantity),
            note: Set(input.note),
            price_alert_threshold: Set(input.price_alert_threshold),
            added_at: Set(now),
            updated_at: Set(now),
        };

        let created = item.insert(&txn).await?;
        self.touch(&txn, wishlist_id).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistItemAdded {
                wishlist_id,
                item_id,
                product_id: input.product_id,
                variant_id: input.variant_id,
            })
            .await;

        Ok(created)
    }

    /// Changes the quantity of an item. The quantity must stay positive;
    /// removal is explicit via [`Self::remove_item`].
    #[instrument(skip(self))]
    pub async fn update_item_quantity(
        &self,
        wishlist_id: Uuid,
        item_id: Uuid,
        actor: Option<Uuid>,
        quantity: i32,
    ) -> Result<wishlist_item::Model, ServiceError> {
        if quantity <= 0 {
            return Err(ServiceError::ValidationError(format!(
                "Item quantity must be positive, got {}",
                quantity
            )));
        }

        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        let item = WishlistItem::find_by_id(item_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Wishlist item {} not found", item_id))
            })?;

        if item.wishlist_id != wishlist_id {
            return Err(ServiceError::InvalidOperation(
                "Item does not belong to this wishlist".to_string(),
            ));
        }

        let old_quantity = item.quantity;
        let mut active: wishlist_item::ActiveModel = item.into();
        active.quantity = Set(quantity);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        self.touch(&txn, wishlist_id).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistItemQuantityChanged {
                wishlist_id,
                item_id,
                old_quantity,
                new_quantity: quantity,
            })
            .await;

        Ok(updated)
    }

    /// Removes an item from a wishlist.
    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        wishlist_id: Uuid,
        item_id: Uuid,
        actor: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        let item = WishlistItem::find_by_id(item_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Wishlist item {} not found", item_id))
            })?;

        if item.wishlist_id != wishlist_id {
            return Err(ServiceError::InvalidOperation(
                "Item does not belong to this wishlist".to_string(),
            ));
        }

        WishlistItem::delete_by_id(item_id).exec(&txn).await?;
        self.touch(&txn, wishlist_id).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistItemRemoved {
                wishlist_id,
                item_id,
            })
            .await;

        Ok(())
    }

    /// Grants a customer a role on the wishlist, or updates an existing
    /// grant's role. Gated by the share policy of the current visibility.
    #[instrument(skip(self))]
    pub async fn share_wishlist(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
        grantee: Uuid,
        role: WishlistRole,
    ) -> Result<wishlist_share::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let (wishlist, shares) = self.load_with_shares(&txn, wishlist_id).await?;

        if !visibility::can_share(&wishlist, &shares, actor) {
            return Err(ServiceError::Forbidden(format!(
                "Not allowed to share wishlist {}",
                wishlist_id
            )));
        }

        if wishlist.customer_id == Some(grantee) {
            return Err(ServiceError::InvalidOperation(
                "The owner does not need a share grant".to_string(),
            ));
        }

        let grant = match shares.into_iter().find(|s| s.customer_id == grantee) {
            Some(existing) => {
                let mut active: wishlist_share::ActiveModel = existing.into();
                active.role = Set(role.as_str().to_string());
                active.update(&txn).await?
            }
            None => {
                let share = wishlist_share::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    wishlist_id: Set(wishlist_id),
                    customer_id: Set(grantee),
                    role: Set(role.as_str().to_string()),
                    created_at: Set(Utc::now()),
                };
                share.insert(&txn).await?
            }
        };

        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistShared {
                wishlist_id,
                customer_id: grantee,
                role: role.as_str().to_string(),
            })
            .await;

        Ok(grant)
    }

    /// Revokes a customer's share grant. Owner only.
    #[instrument(skip(self))]
    pub async fn revoke_share(
        &self,
        wishlist_id: Uuid,
        actor: Option<Uuid>,
        grantee: Uuid,
    ) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let wishlist = self.load(&txn, wishlist_id).await?;
        self.ensure_can_edit(&wishlist, actor, wishlist_id)?;

        let grant = WishlistShare::find()
            .filter(wishlist_share::Column::WishlistId.eq(wishlist_id))
            .filter(wishlist_share::Column::CustomerId.eq(grantee))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No share grant for customer {} on wishlist {}",
                    grantee, wishlist_id
                ))
            })?;

        WishlistShare::delete_by_id(grant.id).exec(&txn).await?;
        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::WishlistShareRevoked {
                wishlist_id,
                customer_id: grantee,
            })
            .await;

        Ok(())
    }

    /// Merges a guest wishlist into the customer's default wishlist at login.
    ///
    /// Runs the pure item reconciliation ([`merge_items`]), persists the
    /// winning item set, deletes the guest list, and reports the outcome
    /// counts through a `GuestWishlistMerged` event. The whole flow is one
    /// transaction so a concurrent double-login cannot observe a
    /// half-merged state.
    ///
    /// A default wishlist is created on the fly when the customer has none.
    #[instrument(skip(self))]
    pub async fn merge_guest_wishlist(
        &self,
        guest_wishlist_id: Uuid,
        customer_id: Uuid,
    ) -> Result<MergeOutcome, ServiceError> {
        let txn = self.db.begin().await?;

        let guest = self.load(&txn, guest_wishlist_id).await?;
        if !guest.is_guest() {
            return Err(ServiceError::InvalidOperation(format!(
                "Wishlist {} is not a guest wishlist",
                guest_wishlist_id
            )));
        }

        let target = self.find_or_create_default(&txn, customer_id).await?;

        let target_items = WishlistItem::find()
            .filter(wishlist_item::Column::WishlistId.eq(target.id))
            .order_by_asc(wishlist_item::Column::AddedAt)
            .all(&txn)
            .await?;
        let source_items = WishlistItem::find()
            .filter(wishlist_item::Column::WishlistId.eq(guest_wishlist_id))
            .order_by_asc(wishlist_item::Column::AddedAt)
            .all(&txn)
            .await?;

        let target_set: Vec<MergeItem> = target_items.iter().map(MergeItem::from).collect();
        let source_set: Vec<MergeItem> = source_items.iter().map(MergeItem::from).collect();
        let result = merge_items(&target_set, &source_set);

        self.persist_merge(&txn, target.id, &target_items, &result)
            .await?;
        self.delete_wishlist_rows(&txn, guest_wishlist_id).await?;

        txn.commit().await?;

        self.event_sender
            .send_or_log(Event::GuestWishlistMerged {
                guest_wishlist_id,
                target_wishlist_id: target.id,
                merged: result.merged,
                skipped: result.skipped,
            })
            .await;

        info!(
            guest_wishlist_id = %guest_wishlist_id,
            target_wishlist_id = %target.id,
            merged = result.merged,
            skipped = result.skipped,
            "Merged guest wishlist into customer wishlist"
        );

        Ok(MergeOutcome {
            target_wishlist_id: target.id,
            result,
        })
    }

    async fn load(
        &self,
        conn: &DatabaseTransaction,
        wishlist_id: Uuid,
    ) -> Result<wishlist::Model, ServiceError> {
        Wishlist::find_by_id(wishlist_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Wishlist {} not found", wishlist_id)))
    }

    async fn load_with_shares(
        &self,
        conn: &impl sea_orm::ConnectionTrait,
        wishlist_id: Uuid,
    ) -> Result<(wishlist::Model, Vec<wishlist_share::Model>), ServiceError> {
        let wishlist = Wishlist::find_by_id(wishlist_id)
            .one(conn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Wishlist {} not found", wishlist_id))
            })?;

        let shares = WishlistShare::find()
            .filter(wishlist_share::Column::WishlistId.eq(wishlist_id))
            .all(conn)
            .await?;

        Ok((wishlist, shares))
    }

    /// Edit gate. Guest lists are session-scoped: the host layer has already
    /// matched the session to the caller, so they are editable here; owned
    /// lists go through the owner-only edit policy.
    fn ensure_can_edit(
        &self,
        wishlist: &wishlist::Model,
        actor: Option<Uuid>,
        wishlist_id: Uuid,
    ) -> Result<(), ServiceError> {
        if wishlist.is_guest() || visibility::can_edit(wishlist, actor) {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(format!(
                "Not allowed to modify wishlist {}",
                wishlist_id
            )))
        }
    }

    async fn touch(
        &self,
        conn: &DatabaseTransaction,
        wishlist_id: Uuid,
    ) -> Result<(), ServiceError> {
        let wishlist = self.load(conn, wishlist_id).await?;
        let mut active: wishlist::ActiveModel = wishlist.into();
        active.updated_at = Set(Utc::now());
        active.update(conn).await?;
        Ok(())
    }

    async fn find_or_create_default(
        &self,
        conn: &DatabaseTransaction,
        customer_id: Uuid,
    ) -> Result<wishlist::Model, ServiceError> {
        let existing = Wishlist::find()
            .filter(wishlist::Column::CustomerId.eq(Some(customer_id)))
            .filter(wishlist::Column::IsDefault.eq(true))
            .one(conn)
            .await?;

        if let Some(found) = existing {
            return Ok(found);
        }

        let now = Utc::now();
        let model = wishlist::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(Some(customer_id)),
            session_id: Set(None),
            name: Set(DEFAULT_WISHLIST_NAME.to_string()),
            description: Set(None),
            visibility: Set(WishlistVisibility::Private.as_str().to_string()),
            is_default: Set(true),
            expires_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(conn).await?)
    }

    /// Applies a merge result to the target wishlist: existing rows whose
    /// identity survived unchanged are left alone, quantity/note losers are
    /// overwritten in place, and new identities are inserted.
    async fn persist_merge(
        &self,
        conn: &DatabaseTransaction,
        target_wishlist_id: Uuid,
        target_items: &[wishlist_item::Model],
        result: &MergeResult,
    ) -> Result<(), ServiceError> {
        let by_key: HashMap<ProductKey, &wishlist_item::Model> = target_items
            .iter()
            .map(|item| {
                (
                    ProductKey {
                        product_id: item.product_id,
                        variant_id: item.variant_id,
                    },
                    item,
                )
            })
            .collect();

        let now = Utc::now();
        for merged in &result.items {
            match by_key.get(&merged.key()) {
                Some(existing) if MergeItem::from(*existing) == *merged => {}
                Some(existing) => {
                    let mut active: wishlist_item::ActiveModel = (*existing).clone().into();
                    active.quantity = Set(merged.quantity);
                    active.note = Set(merged.note.clone());
                    active.price_alert_threshold = Set(merged.price_alert_threshold);
                    active.updated_at = Set(now);
                    active.update(conn).await?;
                }
                None => {
                    let item = wishlist_item::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        wishlist_id: Set(target_wishlist_id),
                        product_id: Set(merged.product_id),
                        variant_id: Set(merged.variant_id),
                        quantity: Set(merged.quantity),
                        note: Set(merged.note.clone()),
                        price_alert_threshold: Set(merged.price_alert_threshold),
                        added_at: Set(now),
                        updated_at: Set(now),
                    };
                    item.insert(conn).await?;
                }
            }
        }

        self.touch(conn, target_wishlist_id).await
    }

    async fn delete_wishlist_rows(
        &self,
        conn: &DatabaseTransaction,
        wishlist_id: Uuid,
    ) -> Result<(), ServiceError> {
        WishlistItem::delete_many()
            .filter(wishlist_item::Column::WishlistId.eq(wishlist_id))
            .exec(conn)
            .await?;
        WishlistShare::delete_many()
            .filter(wishlist_share::Column::WishlistId.eq(wishlist_id))
            .exec(conn)
            .await?;
        Wishlist::delete_by_id(wishlist_id).exec(conn).await?;
        Ok(())
    }
}

/// Input for creating a customer wishlist
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWishlistInput {
    pub customer_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Wishlist name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub visibility: Option<WishlistVisibility>,
}

/// Input for updating a wishlist; `None` fields are left untouched
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateWishlistInput {
    #[validate(length(min = 1, max = 255, message = "Wishlist name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<WishlistVisibility>,
}

/// Input for adding a product to a wishlist
#[derive(Debug, Deserialize, Validate)]
pub struct AddItemInput {
    pub product_id: Uuid,
    pub variant_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    pub note: Option<String>,
    pub price_alert_threshold: Option<Decimal>,
}

/// Wishlist with items and share grants
#[derive(Debug, Serialize)]
pub struct WishlistWithItems {
    pub wishlist: wishlist::Model,
    pub items: Vec<wishlist_item::Model>,
    pub shares: Vec<wishlist_share::Model>,
}

/// Merge call outcome: where the items landed plus the pure merge result.
#[derive(Debug, Serialize)]
pub struct MergeOutcome {
    pub target_wishlist_id: Uuid,
    pub result: MergeResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn create_input_rejects_empty_name() {
        let input = CreateWishlistInput {
            customer_id: Uuid::new_v4(),
            name: "".to_string(),
            description: None,
            visibility: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_input_accepts_visibility() {
        let json = r#"{
            "customer_id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Holiday gifts",
            "visibility": "shared"
        }"#;

        let input: CreateWishlistInput =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(input.name, "Holiday gifts");
        assert_eq!(input.visibility, Some(WishlistVisibility::Shared));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_input_defaults_to_no_changes() {
        let input = UpdateWishlistInput::default();
        assert!(input.name.is_none());
        assert!(input.description.is_none());
        assert!(input.visibility.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn add_item_input_rejects_zero_quantity() {
        let input = AddItemInput {
            product_id: Uuid::new_v4(),
            variant_id: Uuid::new_v4(),
            quantity: 0,
            note: None,
            price_alert_threshold: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn add_item_input_deserializes_with_alert_threshold() {
        let json = r#"{
            "product_id": "550e8400-e29b-41d4-a716-446655440000",
            "variant_id": "650e8400-e29b-41d4-a716-446655440000",
            "quantity": 2,
            "note": "blue one",
            "price_alert_threshold": "24.99"
        }"#;

        let input: AddItemInput =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(input.quantity, 2);
        assert_eq!(input.note.as_deref(), Some("blue one"));
        assert_eq!(input.price_alert_threshold, Some(dec!(24.99)));
        assert!(input.validate().is_ok());
    }
}
