use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::catalog::domain::CatalogItem;
use crate::shared::errors::AppResult;
use crate::shared::storage::{KeyValueStorage, WISHLIST_KEY};

use super::entry::WishlistEntry;

/// Persistent set of saved catalog items, keyed by item id.
///
/// The in-memory collection is authoritative; every mutation rewrites the
/// whole collection through the storage port as its last step. Membership
/// is decided by id alone, so the same item cannot appear twice.
pub struct WishlistStore {
    storage: Arc<dyn KeyValueStorage>,
    entries: RwLock<Vec<WishlistEntry>>,
}

impl WishlistStore {
    /// Create the store and load whatever was persisted by earlier runs.
    /// A missing collection means an empty wishlist, not an error.
    pub async fn open(storage: Arc<dyn KeyValueStorage>) -> AppResult<Self> {
        let store = Self {
            storage,
            entries: RwLock::new(Vec::new()),
        };
        store.reload().await?;
        Ok(store)
    }

    pub async fn reload(&self) -> AppResult<()> {
        let loaded = match self.storage.read(WISHLIST_KEY).await? {
            Some(raw) => serde_json::from_str::<Vec<WishlistEntry>>(&raw)?,
            None => Vec::new(),
        };
        debug!("Loaded {} wishlist entries", loaded.len());
        *self.entries.write().await = loaded;
        Ok(())
    }

    /// Save an item. Adding an id that is already present leaves the
    /// collection untouched, original timestamp included.
    pub async fn add(&self, item: CatalogItem) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.id() == item.id) {
            return Ok(());
        }
        entries.push(WishlistEntry::new(item));
        self.persist(&entries).await
    }

    /// Remove by id. Absent ids are a no-op and skip the storage write.
    pub async fn remove(&self, id: u32) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id() != id);
        if entries.len() == before {
            return Ok(());
        }
        self.persist(&entries).await
    }

    pub async fn clear(&self) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if entries.is_empty() {
            return Ok(());
        }
        entries.clear();
        self.persist(&entries).await
    }

    pub async fn contains(&self, id: u32) -> bool {
        self.entries.read().await.iter().any(|e| e.id() == id)
    }

    /// Saved items in the order they were added, matching the order the
    /// persisted collection is rendered in.
    pub async fn items(&self) -> Vec<CatalogItem> {
        let entries = self.entries.read().await;
        entries.iter().map(|e| e.item.clone()).collect()
    }

    pub async fn entries(&self) -> Vec<WishlistEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn persist(&self, entries: &[WishlistEntry]) -> AppResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.write(WISHLIST_KEY, &raw).await
    }
}
