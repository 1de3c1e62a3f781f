use std::sync::Arc;

use crate::shared::errors::AppResult;
use crate::shared::storage::{KeyValueStorage, DARK_MODE_KEY};

/// Persisted display preferences. Dark mode is the default appearance
/// until the user has expressed a choice.
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub async fn is_dark_mode(&self) -> AppResult<bool> {
        match self.storage.read(DARK_MODE_KEY).await? {
            Some(raw) => Ok(raw.trim() == "true"),
            None => Ok(true),
        }
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> AppResult<()> {
        self.storage.write(DARK_MODE_KEY, &enabled.to_string()).await
    }
}
