use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::{MediaCategory, MediaKind, ReleaseStatus};

/// A catalog entry as returned by the remote search or detail endpoints.
///
/// Immutable once fetched; the session replaces items wholesale on refetch
/// and never mutates them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable identifier, unique across all endpoints of the remote API.
    pub id: u32,
    pub title: String,
    pub image_url: Option<String>,
    pub kind: MediaKind,
    /// Community score on a 0-10 scale, absent when unrated.
    pub score: Option<f32>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    pub synopsis: Option<String>,
    pub status: ReleaseStatus,
    /// Human-readable aired/published range, e.g. "Oct 2002 to Feb 2007".
    pub aired: Option<String>,
    pub studios: Vec<String>,
    /// External detail-page URL on the upstream site.
    pub url: String,
    pub trailer_url: Option<String>,
}

impl CatalogItem {
    /// Released units: episodes for anime, chapters for manga.
    pub fn unit_count(&self) -> Option<u32> {
        self.episodes.or(self.chapters)
    }

    pub fn category(&self) -> MediaCategory {
        self.kind.category()
    }
}

/// A secondary record associated with a catalog item, e.g. a cast member.
/// Fetched separately from the primary record and always best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub id: u32,
    pub name: String,
    pub role: Option<String>,
    pub image_url: Option<String>,
}
