use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{CatalogItem, FilterState, MediaCategory, RelatedEntity};
use crate::shared::errors::AppResult;

/// One page of results, in the order the remote API returned them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub items: Vec<CatalogItem>,
    /// Derived from the API's pagination metadata.
    pub has_more: bool,
}

/// Remote catalog contract.
///
/// Every call is exactly one network round trip; no retries, no caching.
/// Implementations surface transport and malformed-response failures as
/// `AppError` and leave recovery to the session layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Keyword search with optional facets. `page` starts at 1.
    async fn search(&self, filter: &FilterState, page: u32) -> AppResult<SearchPage>;

    /// Top-rated listing for a category; the browse fallback when no
    /// explicit search was requested.
    async fn top(&self, category: MediaCategory, page: u32) -> AppResult<SearchPage>;

    /// Full primary record for a single item.
    async fn fetch_detail(&self, id: u32, category: MediaCategory) -> AppResult<CatalogItem>;

    /// Related entities (cast) for a single item. Callers treat this as
    /// best-effort.
    async fn fetch_related(
        &self,
        id: u32,
        category: MediaCategory,
    ) -> AppResult<Vec<RelatedEntity>>;
}
