use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::media_category::MediaCategory;

/// Release format of a catalog item, as reported by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Tv,
    Movie,
    Ova,
    Ona,
    Special,
    Music,
    Manga,
    Novel,
    OneShot,
    Doujin,
    Manhwa,
    Manhua,
    Unknown,
}

impl MediaKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Tv => "TV",
            MediaKind::Movie => "Movie",
            MediaKind::Ova => "OVA",
            MediaKind::Ona => "ONA",
            MediaKind::Special => "Special",
            MediaKind::Music => "Music",
            MediaKind::Manga => "Manga",
            MediaKind::Novel => "Novel",
            MediaKind::OneShot => "One-shot",
            MediaKind::Doujin => "Doujinshi",
            MediaKind::Manhwa => "Manhwa",
            MediaKind::Manhua => "Manhua",
            MediaKind::Unknown => "Unknown",
        }
    }

    /// Which catalog this kind belongs to. Unknown kinds default to anime.
    pub fn category(&self) -> MediaCategory {
        match self {
            MediaKind::Tv
            | MediaKind::Movie
            | MediaKind::Ova
            | MediaKind::Ona
            | MediaKind::Special
            | MediaKind::Music
            | MediaKind::Unknown => MediaCategory::Anime,
            MediaKind::Manga
            | MediaKind::Novel
            | MediaKind::OneShot
            | MediaKind::Doujin
            | MediaKind::Manhwa
            | MediaKind::Manhua => MediaCategory::Manga,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<&str> for MediaKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tv" => MediaKind::Tv,
            "movie" => MediaKind::Movie,
            "ova" => MediaKind::Ova,
            "ona" => MediaKind::Ona,
            "special" | "tv special" => MediaKind::Special,
            "music" => MediaKind::Music,
            "manga" => MediaKind::Manga,
            "novel" | "light novel" => MediaKind::Novel,
            "one-shot" | "oneshot" => MediaKind::OneShot,
            "doujin" | "doujinshi" => MediaKind::Doujin,
            "manhwa" => MediaKind::Manhwa,
            "manhua" => MediaKind::Manhua,
            _ => MediaKind::Unknown,
        }
    }
}

impl From<String> for MediaKind {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for MediaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}
