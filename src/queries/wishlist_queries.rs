use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    db::DbPool,
    entities::{wishlist, wishlist_item, wishlist_share, Wishlist, WishlistItem},
    errors::ServiceError,
};

/// Trait representing a generic asynchronous read-side query.
#[async_trait]
pub trait Query: Send + Sync {
    type Result: Send + Sync;

    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError>;
}

/// Fetches a single wishlist by id.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetWishlistQuery {
    pub wishlist_id: Uuid,
}

#[async_trait]
impl Query for GetWishlistQuery {
    type Result = Option<wishlist::Model>;

    #[instrument(skip(self, db), fields(wishlist_id = %self.wishlist_id))]
    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError> {
        debug!("Executing GetWishlistQuery");

        Wishlist::find_by_id(self.wishlist_id)
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Fetches the items of a wishlist in insertion order.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetWishlistItemsQuery {
    pub wishlist_id: Uuid,
}

#[async_trait]
impl Query for GetWishlistItemsQuery {
    type Result = Vec<wishlist_item::Model>;

    #[instrument(skip(self, db), fields(wishlist_id = %self.wishlist_id))]
    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError> {
        WishlistItem::find()
            .filter(wishlist_item::Column::WishlistId.eq(self.wishlist_id))
            .order_by_asc(wishlist_item::Column::AddedAt)
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Fetches a customer's wishlists, newest first, with pagination.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetCustomerWishlistsQuery {
    pub customer_id: Uuid,
    pub page: u64,
    pub per_page: u64,
}

#[async_trait]
impl Query for GetCustomerWishlistsQuery {
    type Result = (Vec<wishlist::Model>, u64);

    #[instrument(skip(self, db), fields(customer_id = %self.customer_id))]
    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError> {
        let paginator = Wishlist::find()
            .filter(wishlist::Column::CustomerId.eq(Some(self.customer_id)))
            .order_by_desc(wishlist::Column::CreatedAt)
            .paginate(db, self.per_page);

        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(self.page.saturating_sub(1)).await?;

        Ok((data, total))
    }
}

/// Fetches the wishlists other customers have shared with this customer.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetSharedWithCustomerQuery {
    pub customer_id: Uuid,
}

#[async_trait]
impl Query for GetSharedWithCustomerQuery {
    type Result = Vec<wishlist::Model>;

    #[instrument(skip(self, db), fields(customer_id = %self.customer_id))]
    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError> {
        Wishlist::find()
            .join(JoinType::InnerJoin, wishlist::Relation::WishlistShares.def())
            .filter(wishlist_share::Column::CustomerId.eq(self.customer_id))
            .order_by_desc(wishlist::Column::UpdatedAt)
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Finds the (at most one) live guest wishlist for a storefront session.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindGuestWishlistQuery {
    pub session_id: String,
}

#[async_trait]
impl Query for FindGuestWishlistQuery {
    type Result = Option<wishlist::Model>;

    #[instrument(skip(self, db))]
    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError> {
        Wishlist::find()
            .filter(wishlist::Column::SessionId.eq(Some(self.session_id.clone())))
            .filter(wishlist::Column::CustomerId.is_null())
            .order_by_desc(wishlist::Column::CreatedAt)
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Fetches a customer's default wishlist, if they have one.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetDefaultWishlistQuery {
    pub customer_id: Uuid,
}

#[async_trait]
impl Query for GetDefaultWishlistQuery {
    type Result = Option<wishlist::Model>;

    #[instrument(skip(self, db), fields(customer_id = %self.customer_id))]
    async fn execute(&self, db: &DbPool) -> Result<Self::Result, ServiceError> {
        Wishlist::find()
            .filter(wishlist::Column::CustomerId.eq(Some(self.customer_id)))
            .filter(wishlist::Column::IsDefault.eq(true))
            .one(db)
            .await
            .map_err(ServiceError::DatabaseError)
    }
}
