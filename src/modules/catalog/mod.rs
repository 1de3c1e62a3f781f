pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::{BrowseSession, BrowseSnapshot, DetailLoader, ItemDetail, LoadPhase};
pub use domain::{
    CatalogItem, FilterState, MediaCategory, MediaKind, RelatedEntity, ReleaseStatus,
    SearchFilters,
};
pub use infrastructure::JikanClient;
pub use traits::{CatalogProvider, SearchPage};
