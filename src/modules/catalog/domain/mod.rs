pub mod entities;
pub mod value_objects;

pub use entities::{CatalogItem, RelatedEntity};
pub use value_objects::{FilterState, MediaCategory, MediaKind, ReleaseStatus, SearchFilters};
