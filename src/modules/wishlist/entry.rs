use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::CatalogItem;

/// A saved catalog item together with the moment it was saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub item: CatalogItem,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn new(item: CatalogItem) -> Self {
        Self {
            item,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> u32 {
        self.item.id
    }
}
