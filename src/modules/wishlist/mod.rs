mod entry;
mod store;

pub use entry::WishlistEntry;
pub use store::WishlistStore;
