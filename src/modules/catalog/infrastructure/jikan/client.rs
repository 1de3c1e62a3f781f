use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::modules::catalog::domain::{CatalogItem, FilterState, MediaCategory, RelatedEntity};
use crate::modules::catalog::traits::{CatalogProvider, SearchPage};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

use super::dto::{
    JikanCharacterListResponse, JikanDetailResponse, JikanListResponse, JikanSearchParams,
};
use super::mapper::JikanMapper;

/// Jikan serves at most 25 results per page.
const MAX_PAGE_SIZE: u32 = 25;

/// Remote catalog client for the Jikan v4 REST API.
///
/// Exactly one network round trip per call; failures are classified into
/// `AppError` and recovered by the session layer.
pub struct JikanClient {
    client: Client,
    base_url: String,
    page_size: u32,
}

impl JikanClient {
    pub fn new() -> AppResult<Self> {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                AppError::NetworkFailure(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.min(MAX_PAGE_SIZE),
        })
    }

    async fn fetch_page(&self, url: &str, params: &JikanSearchParams) -> AppResult<SearchPage> {
        let response = self.client.get(url).query(params).send().await?;
        Self::check_status(response.status())?;

        let payload = response.json::<JikanListResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse catalog response: {}", e))
        })?;

        let has_more = payload
            .pagination
            .map(|p| p.has_next_page)
            .unwrap_or(false);

        Ok(SearchPage {
            items: payload.data.into_iter().map(JikanMapper::to_item).collect(),
            has_more,
        })
    }

    fn check_status(status: StatusCode) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => {
                Err(AppError::NotFound("Remote resource not found".to_string()))
            }
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::NetworkFailure(
                "Catalog API rate limit exceeded".to_string(),
            )),
            s if s.is_server_error() => Err(AppError::NetworkFailure(format!(
                "Catalog API unavailable: {}",
                s
            ))),
            s => Err(AppError::ApiError(format!(
                "Unexpected status code from catalog API: {}",
                s
            ))),
        }
    }

    fn default_params(&self, page: u32) -> JikanSearchParams {
        JikanSearchParams {
            q: None,
            page,
            limit: self.page_size,
            sfw: true,
            kind: None,
            status: None,
            genres: None,
            rating: None,
        }
    }
}

#[async_trait]
impl CatalogProvider for JikanClient {
    async fn search(&self, filter: &FilterState, page: u32) -> AppResult<SearchPage> {
        if page == 0 {
            return Err(AppError::InvalidInput("Page numbers start at 1".to_string()));
        }

        let term = filter.term.trim();
        let params = JikanSearchParams {
            q: if term.is_empty() {
                None
            } else {
                Some(term.to_string())
            },
            kind: filter.filters.kind.clone(),
            status: filter.filters.status.clone(),
            genres: filter.filters.genre.clone(),
            rating: filter.filters.rating.clone(),
            ..self.default_params(page)
        };

        let url = format!("{}/{}", self.base_url, filter.category.api_segment());
        debug!(
            "Searching {} page {} (term: {:?})",
            filter.category, page, term
        );
        self.fetch_page(&url, &params).await
    }

    async fn top(&self, category: MediaCategory, page: u32) -> AppResult<SearchPage> {
        if page == 0 {
            return Err(AppError::InvalidInput("Page numbers start at 1".to_string()));
        }

        let url = format!("{}/top/{}", self.base_url, category.api_segment());
        debug!("Fetching top {} page {}", category, page);
        self.fetch_page(&url, &self.default_params(page)).await
    }

    async fn fetch_detail(&self, id: u32, category: MediaCategory) -> AppResult<CatalogItem> {
        let url = format!("{}/{}/{}/full", self.base_url, category.api_segment(), id);
        debug!("Fetching {} detail {}", category, id);

        let response = self.client.get(&url).send().await?;
        Self::check_status(response.status())?;

        let payload = response.json::<JikanDetailResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse detail response: {}", e))
        })?;

        Ok(JikanMapper::to_item(payload.data))
    }

    async fn fetch_related(
        &self,
        id: u32,
        category: MediaCategory,
    ) -> AppResult<Vec<RelatedEntity>> {
        let url = format!(
            "{}/{}/{}/characters",
            self.base_url,
            category.api_segment(),
            id
        );
        debug!("Fetching {} characters {}", category, id);

        let response = self.client.get(&url).send().await?;
        Self::check_status(response.status())?;

        let payload = response
            .json::<JikanCharacterListResponse>()
            .await
            .map_err(|e| {
                AppError::ApiError(format!("Failed to parse characters response: {}", e))
            })?;

        Ok(payload
            .data
            .into_iter()
            .map(JikanMapper::to_related)
            .collect())
    }
}
