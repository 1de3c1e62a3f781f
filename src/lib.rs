//! Meguru is the backend core of an anime and manga catalog browser:
//! a Jikan v4 client, a faceted browse session with incremental
//! pagination, a persisted wishlist and display preferences.

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    BrowseSession, BrowseSnapshot, CatalogItem, CatalogProvider, DetailLoader, FilterState,
    ItemDetail, JikanClient, LoadPhase, MediaCategory, MediaKind, RelatedEntity, ReleaseStatus,
    SearchFilters, SearchPage,
};
pub use modules::preferences::ThemeStore;
pub use modules::wishlist::{WishlistEntry, WishlistStore};
pub use shared::{AppConfig, AppError, AppResult, FileStorage, KeyValueStorage, MemoryStorage};
