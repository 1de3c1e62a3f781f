#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use meguru::{
    AppError, AppResult, CatalogItem, CatalogProvider, FilterState, MediaCategory, MediaKind,
    RelatedEntity, ReleaseStatus, SearchPage,
};

/// Route library logs through the test harness. Safe to call from every
/// test; only the first call in a process installs the subscriber.
pub fn init_logging() {
    meguru::shared::logging::init();
}

pub fn item(id: u32, title: &str) -> CatalogItem {
    CatalogItem {
        id,
        title: title.to_string(),
        image_url: Some(format!("https://cdn.example.org/{}.jpg", id)),
        kind: MediaKind::Tv,
        score: Some(8.0),
        episodes: Some(24),
        chapters: None,
        synopsis: Some("A story.".to_string()),
        status: ReleaseStatus::Finished,
        aired: None,
        studios: Vec::new(),
        url: format!("https://example.org/anime/{}", id),
        trailer_url: None,
    }
}

pub fn page(ids: &[u32], has_more: bool) -> SearchPage {
    SearchPage {
        items: ids
            .iter()
            .map(|id| item(*id, &format!("Item {}", id)))
            .collect(),
        has_more,
    }
}

/// Provider that replays queued responses in order, with an optional
/// per-response delay so tests can interleave in-flight requests.
#[derive(Default)]
pub struct ScriptedProvider {
    search_responses: Mutex<VecDeque<(AppResult<SearchPage>, Option<Duration>)>>,
    top_responses: Mutex<VecDeque<(AppResult<SearchPage>, Option<Duration>)>>,
    detail_responses: Mutex<VecDeque<AppResult<CatalogItem>>>,
    related_responses: Mutex<VecDeque<AppResult<Vec<RelatedEntity>>>>,
    pub search_calls: AtomicUsize,
    pub top_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_search(&self, response: AppResult<SearchPage>) {
        self.search_responses
            .lock()
            .unwrap()
            .push_back((response, None));
    }

    pub fn queue_search_delayed(&self, response: AppResult<SearchPage>, delay: Duration) {
        self.search_responses
            .lock()
            .unwrap()
            .push_back((response, Some(delay)));
    }

    pub fn queue_top(&self, response: AppResult<SearchPage>) {
        self.top_responses
            .lock()
            .unwrap()
            .push_back((response, None));
    }

    pub fn queue_detail(&self, response: AppResult<CatalogItem>) {
        self.detail_responses.lock().unwrap().push_back(response);
    }

    pub fn queue_related(&self, response: AppResult<Vec<RelatedEntity>>) {
        self.related_responses.lock().unwrap().push_back(response);
    }

    fn unexpected(kind: &str) -> AppError {
        AppError::ApiError(format!("unscripted {} call", kind))
    }
}

#[async_trait]
impl CatalogProvider for ScriptedProvider {
    async fn search(&self, _filter: &FilterState, _page: u32) -> AppResult<SearchPage> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.search_responses.lock().unwrap().pop_front();
        match next {
            Some((response, Some(delay))) => {
                tokio::time::sleep(delay).await;
                response
            }
            Some((response, None)) => response,
            None => Err(Self::unexpected("search")),
        }
    }

    async fn top(&self, _category: MediaCategory, _page: u32) -> AppResult<SearchPage> {
        self.top_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.top_responses.lock().unwrap().pop_front();
        match next {
            Some((response, Some(delay))) => {
                tokio::time::sleep(delay).await;
                response
            }
            Some((response, None)) => response,
            None => Err(Self::unexpected("top")),
        }
    }

    async fn fetch_detail(&self, _id: u32, _category: MediaCategory) -> AppResult<CatalogItem> {
        self.detail_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unexpected("detail")))
    }

    async fn fetch_related(
        &self,
        _id: u32,
        _category: MediaCategory,
    ) -> AppResult<Vec<RelatedEntity>> {
        self.related_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unexpected("related")))
    }
}
