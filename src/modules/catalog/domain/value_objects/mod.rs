mod filter;
mod media_category;
mod media_kind;
mod release_status;

pub use filter::{FilterState, SearchFilters};
pub use media_category::MediaCategory;
pub use media_kind::MediaKind;
pub use release_status::ReleaseStatus;
