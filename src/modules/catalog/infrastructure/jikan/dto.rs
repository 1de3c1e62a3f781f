use serde::{Deserialize, Serialize};

// Wire types for the Jikan v4 REST API. Only the fields the session
// consumes are modeled; everything else is ignored on deserialization.

#[derive(Debug, Clone, Deserialize)]
pub struct JikanListResponse {
    pub data: Vec<JikanMedia>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanDetailResponse {
    pub data: JikanMedia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanPagination {
    pub has_next_page: bool,
    pub last_visible_page: Option<u32>,
    pub current_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanMedia {
    pub mal_id: u32,
    pub url: String,
    pub images: Option<JikanImages>,
    pub trailer: Option<JikanTrailer>,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    pub status: Option<String>,
    // Anime entries carry `aired`, manga entries carry `published`.
    pub aired: Option<JikanDateRange>,
    pub published: Option<JikanDateRange>,
    pub score: Option<f32>,
    pub synopsis: Option<String>,
    #[serde(default)]
    pub studios: Vec<JikanEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
    pub webp: Option<JikanImageSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanTrailer {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanDateRange {
    pub from: Option<String>,
    pub to: Option<String>,
    pub string: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanEntity {
    pub mal_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacterListResponse {
    pub data: Vec<JikanCharacterEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacterEdge {
    pub character: JikanCharacter,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacter {
    pub mal_id: u32,
    pub name: String,
    pub images: Option<JikanImages>,
}

// Search request parameters. Unset facets are omitted from the query
// string entirely.
#[derive(Debug, Clone, Serialize)]
pub struct JikanSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sfw: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_anime_search_entry() {
        let json = r#"{
            "data": [{
                "mal_id": 20,
                "url": "https://myanimelist.net/anime/20/Naruto",
                "images": {"jpg": {"image_url": "https://cdn.example/s.jpg", "large_image_url": "https://cdn.example/l.jpg"}},
                "trailer": {"url": "https://youtube.com/watch?v=abc"},
                "title": "Naruto",
                "type": "TV",
                "episodes": 220,
                "status": "Finished Airing",
                "aired": {"from": "2002-10-03T00:00:00+00:00", "to": "2007-02-08T00:00:00+00:00", "string": "Oct 3, 2002 to Feb 8, 2007"},
                "score": 8.01,
                "synopsis": "Moments prior to Naruto Uzumaki's birth...",
                "studios": [{"mal_id": 1, "name": "Pierrot"}]
            }],
            "pagination": {"has_next_page": true, "last_visible_page": 20, "current_page": 1}
        }"#;

        let response: JikanListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        let media = &response.data[0];
        assert_eq!(media.mal_id, 20);
        assert_eq!(media.media_type.as_deref(), Some("TV"));
        assert_eq!(media.episodes, Some(220));
        assert_eq!(media.chapters, None);
        assert_eq!(media.studios[0].name, "Pierrot");
        assert!(response.pagination.unwrap().has_next_page);
    }

    #[test]
    fn deserializes_manga_entry_with_published_range() {
        let json = r#"{
            "data": {
                "mal_id": 11,
                "url": "https://myanimelist.net/manga/11/Naruto",
                "images": {"jpg": {"image_url": "https://cdn.example/m.jpg"}},
                "title": "Naruto",
                "type": "Manga",
                "chapters": 700,
                "status": "Finished",
                "published": {"from": "1999-09-21T00:00:00+00:00", "to": "2014-11-10T00:00:00+00:00", "string": "Sep 21, 1999 to Nov 10, 2014"},
                "score": 8.07,
                "synopsis": "Whenever Naruto Uzumaki proclaims..."
            }
        }"#;

        let response: JikanDetailResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.chapters, Some(700));
        assert_eq!(response.data.episodes, None);
        assert!(response.data.aired.is_none());
        assert_eq!(
            response.data.published.unwrap().string.as_deref(),
            Some("Sep 21, 1999 to Nov 10, 2014")
        );
        assert!(response.data.studios.is_empty());
    }

    #[test]
    fn deserializes_character_list() {
        let json = r#"{
            "data": [
                {"character": {"mal_id": 17, "name": "Uzumaki, Naruto", "images": {"jpg": {"image_url": "https://cdn.example/c.jpg"}}}, "role": "Main"},
                {"character": {"mal_id": 85, "name": "Hatake, Kakashi"}, "role": "Supporting"}
            ]
        }"#;

        let response: JikanCharacterListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].character.name, "Uzumaki, Naruto");
        assert_eq!(response.data[1].role.as_deref(), Some("Supporting"));
        assert!(response.data[1].character.images.is_none());
    }

    #[test]
    fn search_params_omit_unset_facets() {
        let params = JikanSearchParams {
            q: Some("naruto".to_string()),
            page: 1,
            limit: 24,
            sfw: true,
            kind: None,
            status: Some("airing".to_string()),
            genres: None,
            rating: None,
        };
        let encoded = serde_json::to_string(&params).unwrap();
        assert!(encoded.contains("\"q\":\"naruto\""));
        assert!(encoded.contains("\"status\":\"airing\""));
        assert!(!encoded.contains("genres"));
        assert!(!encoded.contains("rating"));
        assert!(!encoded.contains("\"type\""));
    }
}
