use serde::{Deserialize, Serialize};

use super::media_category::MediaCategory;

/// The four optional single-valued search facets.
///
/// Facet values are the remote API's own query tokens (e.g. "tv",
/// "airing", a numeric genre id, "pg13") and are passed through verbatim;
/// an unset facet is omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
}

impl SearchFilters {
    pub fn is_default(&self) -> bool {
        self.kind.is_none()
            && self.status.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
    }
}

/// Current category, search term and facets of a browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: MediaCategory,
    pub term: String,
    pub filters: SearchFilters,
}

impl FilterState {
    /// True when no explicit search was requested. The session then browses
    /// whatever the remote API designates as top-rated for the category, so
    /// the view is never blank on first load.
    pub fn is_browse_default(&self) -> bool {
        self.term.trim().is_empty() && self.filters.is_default()
    }

    /// Composite key over all five facets. Results belonging to an older
    /// key are discarded once a request with a newer key has been issued.
    pub fn request_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.category.api_segment(),
            self.term.trim(),
            self.filters.kind.as_deref().unwrap_or(""),
            self.filters.status.as_deref().unwrap_or(""),
            self.filters.genre.as_deref().unwrap_or(""),
            self.filters.rating.as_deref().unwrap_or("")
        )
    }
}
