use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level content category selecting which remote catalog is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    #[default]
    Anime,
    Manga,
}

impl MediaCategory {
    /// Path segment used by the remote API for this category.
    pub fn api_segment(&self) -> &'static str {
        match self {
            MediaCategory::Anime => "anime",
            MediaCategory::Manga => "manga",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.api_segment())
    }
}
