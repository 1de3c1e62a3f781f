use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::KeyValueStorage;
use crate::shared::errors::{AppError, AppResult};

/// File-backed storage: one `<key>.json` document per key under a data
/// directory. A write replaces the whole document, so the file always
/// holds the last fully serialized state.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::InvalidInput(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::StorageError(format!(
                "Failed to create {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        tokio::fs::write(&path, value).await.map_err(|e| {
            AppError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Persisted key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::StorageError(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_path_like_keys() {
        let storage = FileStorage::new("/tmp/meguru-test");
        assert!(storage.path_for("wishlist").is_ok());
        assert!(storage.path_for("../escape").is_err());
        assert!(storage.path_for("").is_err());
        assert!(storage.path_for("a/b").is_err());
    }
}
