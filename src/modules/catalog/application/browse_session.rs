use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::modules::catalog::domain::{CatalogItem, FilterState, MediaCategory};
use crate::modules::catalog::traits::{CatalogProvider, SearchPage};
use crate::shared::errors::{AppError, AppResult};

/// Loading phase of the accumulated result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No request issued yet.
    Idle,
    /// First page for the current facet combination is in flight.
    LoadingInitial,
    /// At least one completion applied; more pages may be available.
    Loaded,
    /// A follow-up page is in flight; existing items stay rendered.
    LoadingMore,
    /// The API reported no further pages for this facet combination.
    Exhausted,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::LoadingInitial | LoadPhase::LoadingMore)
    }
}

#[derive(Debug)]
struct BrowseState {
    filter: FilterState,
    phase: LoadPhase,
    page: u32,
    items: Vec<CatalogItem>,
    has_more: bool,
    error: Option<AppError>,
    // Monotonic id of the most recently issued request. A completion
    // carrying an older id belongs to a superseded facet/page combination
    // and is discarded.
    request_seq: u64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            phase: LoadPhase::Idle,
            page: 1,
            items: Vec::new(),
            has_more: false,
            error: None,
            request_seq: 0,
        }
    }
}

/// Render-ready copy of the session state.
#[derive(Debug, Clone)]
pub struct BrowseSnapshot {
    pub filter: FilterState,
    pub phase: LoadPhase,
    pub page: u32,
    pub items: Vec<CatalogItem>,
    pub has_more: bool,
    pub error: Option<String>,
}

/// One catalog browsing session: filter state, the accumulated result
/// pages and the in-flight bookkeeping that keeps completions consistent
/// with the most recently requested facet combination.
///
/// Failures never escape the session; they resolve to an error flag on the
/// snapshot so the caller can always render.
pub struct BrowseSession {
    provider: Arc<dyn CatalogProvider>,
    state: Arc<RwLock<BrowseState>>,
}

impl BrowseSession {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(BrowseState::default())),
        }
    }

    pub async fn snapshot(&self) -> BrowseSnapshot {
        let state = self.state.read().await;
        BrowseSnapshot {
            filter: state.filter.clone(),
            phase: state.phase,
            page: state.page,
            items: state.items.clone(),
            has_more: state.has_more,
            error: state.error.as_ref().map(|e| e.to_string()),
        }
    }

    pub async fn filter(&self) -> FilterState {
        self.state.read().await.filter.clone()
    }

    // Facet mutations. Each one resets pagination to page 1, clears the
    // accumulated list and issues a fresh request for the new combination.

    pub async fn set_category(&self, category: MediaCategory) {
        self.apply_filter_change(move |f| f.category = category)
            .await;
    }

    pub async fn set_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.apply_filter_change(move |f| f.term = term).await;
    }

    pub async fn set_kind_facet(&self, kind: Option<String>) {
        self.apply_filter_change(move |f| f.filters.kind = kind)
            .await;
    }

    pub async fn set_status_facet(&self, status: Option<String>) {
        self.apply_filter_change(move |f| f.filters.status = status)
            .await;
    }

    pub async fn set_genre_facet(&self, genre: Option<String>) {
        self.apply_filter_change(move |f| f.filters.genre = genre)
            .await;
    }

    pub async fn set_rating_facet(&self, rating: Option<String>) {
        self.apply_filter_change(move |f| f.filters.rating = rating)
            .await;
    }

    /// Load (or re-load) page 1 for the current facet combination. Used
    /// for the first activation of the view and for manual retry after a
    /// failed initial load.
    pub async fn refresh(&self) {
        let (seq, filter) = {
            let mut state = self.state.write().await;
            state.request_seq += 1;
            state.page = 1;
            state.items.clear();
            state.has_more = false;
            state.error = None;
            state.phase = LoadPhase::LoadingInitial;
            (state.request_seq, state.filter.clone())
        };

        let result = self.fetch(&filter, 1).await;

        let mut state = self.state.write().await;
        if state.request_seq != seq {
            debug!(
                "Discarding superseded initial load for key {} (seq {})",
                filter.request_key(),
                seq
            );
            return;
        }

        match result {
            Ok(page) => {
                // A single-page result set lands directly in Exhausted;
                // Loaded is only surfaced while a follow-up page can
                // still be requested.
                state.phase = if page.has_more {
                    LoadPhase::Loaded
                } else {
                    LoadPhase::Exhausted
                };
                state.has_more = page.has_more;
                state.items = page.items;
            }
            Err(e) => {
                // Not fatal: a facet change or refresh() recovers.
                warn!("Initial load failed: {}", e);
                state.phase = LoadPhase::Loaded;
                state.has_more = false;
                state.error = Some(e);
            }
        }
    }

    /// The UI raises this when the viewport reaches the last rendered
    /// item. No-ops unless a follow-up page can actually be requested.
    pub async fn notify_end_reached(&self) {
        let (seq, filter, page) = {
            let mut state = self.state.write().await;
            if state.phase != LoadPhase::Loaded || !state.has_more {
                return;
            }
            state.request_seq += 1;
            state.page += 1;
            state.error = None;
            state.phase = LoadPhase::LoadingMore;
            (state.request_seq, state.filter.clone(), state.page)
        };

        let result = self.fetch(&filter, page).await;

        let mut state = self.state.write().await;
        if state.request_seq != seq {
            debug!("Discarding superseded load of page {} (seq {})", page, seq);
            return;
        }

        match result {
            Ok(next) => {
                state.phase = if next.has_more {
                    LoadPhase::Loaded
                } else {
                    LoadPhase::Exhausted
                };
                state.has_more = next.has_more;
                // Appended pages keep the API's returned order.
                state.items.extend(next.items);
            }
            Err(e) => {
                // Prior pages stay rendered; has_more is untouched so the
                // same page can be requested again on the next trigger.
                warn!("Failed to load page {}: {}", page, e);
                state.phase = LoadPhase::Loaded;
                state.page -= 1;
                state.error = Some(e);
            }
        }
    }

    async fn fetch(&self, filter: &FilterState, page: u32) -> AppResult<SearchPage> {
        if filter.is_browse_default() {
            self.provider.top(filter.category, page).await
        } else {
            self.provider.search(filter, page).await
        }
    }

    async fn apply_filter_change(&self, mutate: impl FnOnce(&mut FilterState)) {
        {
            let mut state = self.state.write().await;
            mutate(&mut state.filter);
        }
        self.refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::{MediaKind, ReleaseStatus};
    use crate::modules::catalog::traits::MockCatalogProvider;

    fn item(id: u32) -> CatalogItem {
        CatalogItem {
            id,
            title: format!("Item {}", id),
            image_url: None,
            kind: MediaKind::Tv,
            score: Some(7.5),
            episodes: Some(12),
            chapters: None,
            synopsis: None,
            status: ReleaseStatus::Finished,
            aired: None,
            studios: Vec::new(),
            url: format!("https://example.org/anime/{}", id),
            trailer_url: None,
        }
    }

    fn page(ids: &[u32], has_more: bool) -> SearchPage {
        SearchPage {
            items: ids.iter().copied().map(item).collect(),
            has_more,
        }
    }

    #[tokio::test]
    async fn browse_default_routes_to_top_rated() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_top()
            .times(1)
            .returning(|_, _| Ok(page(&[1, 2], false)));
        provider.expect_search().never();

        let session = BrowseSession::new(Arc::new(provider));
        session.refresh().await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.phase, LoadPhase::Exhausted);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn explicit_term_routes_to_search() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_top().never();
        provider
            .expect_search()
            .withf(|filter, page| filter.term == "naruto" && *page == 1)
            .times(1)
            .returning(|_, _| Ok(page(&[20], true)));

        let session = BrowseSession::new(Arc::new(provider));
        session.set_term("naruto").await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.phase, LoadPhase::Loaded);
        assert!(snapshot.has_more);
        assert_eq!(snapshot.items[0].id, 20);
    }

    #[tokio::test]
    async fn end_reached_is_silent_once_exhausted() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_top()
            .times(1)
            .returning(|_, _| Ok(page(&[1], false)));

        let session = BrowseSession::new(Arc::new(provider));
        session.refresh().await;
        // Exhausted: these must not issue any fetch (mock would panic).
        session.notify_end_reached().await;
        session.notify_end_reached().await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.phase, LoadPhase::Exhausted);
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn initial_failure_resolves_to_renderable_error() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_search()
            .times(1)
            .returning(|_, _| Err(AppError::NetworkFailure("boom".to_string())));

        let session = BrowseSession::new(Arc::new(provider));
        session.set_term("naruto").await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.phase, LoadPhase::Loaded);
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.has_more);
        assert!(snapshot.error.unwrap().contains("boom"));
    }

    #[tokio::test]
    async fn load_more_failure_keeps_accumulated_pages() {
        let mut provider = MockCatalogProvider::new();
        let mut calls = 0;
        provider.expect_search().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(page(&[1, 2], true))
            } else {
                Err(AppError::NetworkFailure("page 2 down".to_string()))
            }
        });

        let session = BrowseSession::new(Arc::new(provider));
        session.set_term("naruto").await;
        session.notify_end_reached().await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.phase, LoadPhase::Loaded);
        assert_eq!(snapshot.items.len(), 2);
        assert!(snapshot.has_more);
        assert_eq!(snapshot.page, 1);
        assert!(snapshot.error.unwrap().contains("page 2 down"));
    }
}
