pub mod wishlist;
pub mod wishlist_item;
pub mod wishlist_share;

pub use wishlist::{Entity as Wishlist, Model as WishlistModel, WishlistVisibility};
pub use wishlist_item::{Entity as WishlistItem, Model as WishlistItemModel};
pub use wishlist_share::{Entity as WishlistShare, Model as WishlistShareModel, WishlistRole};
