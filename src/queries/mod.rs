pub mod wishlist_queries;

pub use wishlist_queries::{
    FindGuestWishlistQuery, GetCustomerWishlistsQuery, GetDefaultWishlistQuery,
    GetSharedWithCustomerQuery, GetWishlistItemsQuery, GetWishlistQuery, Query,
};
