use crate::modules::catalog::domain::{CatalogItem, MediaKind, RelatedEntity, ReleaseStatus};

use super::dto::{JikanCharacterEdge, JikanImages, JikanMedia};

/// Maps Jikan wire types into domain types. Missing secondary data
/// (images, studios, date strings) degrades to empty values rather than
/// failing the whole item.
pub struct JikanMapper;

impl JikanMapper {
    pub fn to_item(data: JikanMedia) -> CatalogItem {
        let aired = data
            .aired
            .as_ref()
            .or(data.published.as_ref())
            .and_then(|range| range.string.clone().or_else(|| range.from.clone()));
        let image_url = Self::image_url(data.images.as_ref());

        CatalogItem {
            id: data.mal_id,
            title: data.title,
            image_url,
            kind: data
                .media_type
                .as_deref()
                .map(MediaKind::from)
                .unwrap_or(MediaKind::Unknown),
            score: data.score,
            episodes: data.episodes,
            chapters: data.chapters,
            synopsis: data.synopsis,
            status: data
                .status
                .as_deref()
                .map(ReleaseStatus::from)
                .unwrap_or(ReleaseStatus::Unknown),
            aired,
            studios: data.studios.into_iter().map(|s| s.name).collect(),
            url: data.url,
            trailer_url: data.trailer.and_then(|t| t.url),
        }
    }

    pub fn to_related(edge: JikanCharacterEdge) -> RelatedEntity {
        let image_url = Self::image_url(edge.character.images.as_ref());
        RelatedEntity {
            id: edge.character.mal_id,
            name: edge.character.name,
            role: edge.role,
            image_url,
        }
    }

    // Prefer the large jpg rendition, falling back through the smaller
    // ones and the webp set.
    fn image_url(images: Option<&JikanImages>) -> Option<String> {
        let images = images?;
        let set = images.jpg.as_ref().or(images.webp.as_ref())?;
        set.large_image_url
            .clone()
            .or_else(|| set.image_url.clone())
    }
}
