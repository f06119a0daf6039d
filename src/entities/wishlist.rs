use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wishlist entity.
///
/// A wishlist belongs to a customer, or to nobody when it is a guest list
/// scoped to a storefront session (`customer_id` is `None` and `session_id`
/// carries the session handle). Guest lists are ephemeral and carry an
/// expiry timestamp.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(nullable)]
    pub customer_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub session_id: Option<String>,
    pub name: String,
    #[sea_orm(nullable)]
    pub description: Option<String>,
    /// Stored as a plain string so that an unknown value coming out of the
    /// database degrades to "deny everything" instead of a decode error.
    /// See [`Model::parsed_visibility`].
    pub visibility: String,
    pub is_default: bool,
    #[sea_orm(nullable)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlist_item::Entity")]
    WishlistItems,
    #[sea_orm(has_many = "super::wishlist_share::Entity")]
    WishlistShares,
}

impl Related<super::wishlist_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistItems.def()
    }
}

impl Related<super::wishlist_share::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistShares.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parses the stored visibility value. Returns `None` for anything that
    /// is not one of the three known types; permission checks treat `None`
    /// as deny-all.
    pub fn parsed_visibility(&self) -> Option<WishlistVisibility> {
        WishlistVisibility::parse(&self.visibility)
    }

    /// True when the wishlist has no owning customer (guest list).
    pub fn is_guest(&self) -> bool {
        self.customer_id.is_none()
    }
}

/// Wishlist visibility type. Exactly one applies to a wishlist at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WishlistVisibility {
    Private,
    Public,
    Shared,
}

impl WishlistVisibility {
    /// Lenient parse of a stored visibility value. Unknown values yield
    /// `None` rather than an error so that callers can fail closed.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "private" => Some(Self::Private),
            "public" => Some(Self::Public),
            "shared" => Some(Self::Shared),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::Shared => "shared",
        }
    }
}

impl std::fmt::Display for WishlistVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
