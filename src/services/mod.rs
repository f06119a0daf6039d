pub mod wishlist;

pub use wishlist::WishlistService;
