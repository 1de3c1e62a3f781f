pub mod catalog;
pub mod preferences;
pub mod wishlist;
