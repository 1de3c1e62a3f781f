use std::sync::Arc;

use tracing::warn;

use crate::modules::catalog::domain::{CatalogItem, MediaCategory, RelatedEntity};
use crate::modules::catalog::traits::CatalogProvider;
use crate::shared::errors::AppResult;

/// Combined result of a detail load.
#[derive(Debug, Clone)]
pub struct ItemDetail {
    pub item: CatalogItem,
    pub related: Vec<RelatedEntity>,
}

/// Loads the single-item view: the full primary record plus its related
/// entities.
///
/// The primary record is load-bearing; the related list is best-effort
/// and degrades to empty on failure instead of failing the load.
pub struct DetailLoader {
    provider: Arc<dyn CatalogProvider>,
}

impl DetailLoader {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    pub async fn load(&self, id: u32, category: MediaCategory) -> AppResult<ItemDetail> {
        let item = self.provider.fetch_detail(id, category).await?;

        let related = match self.provider.fetch_related(id, category).await {
            Ok(related) => related,
            Err(e) => {
                warn!("Related entities unavailable for {} {}: {}", category, id, e);
                Vec::new()
            }
        };

        Ok(ItemDetail { item, related })
    }
}
