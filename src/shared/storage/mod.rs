mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Storage key holding the serialized wishlist collection.
pub const WISHLIST_KEY: &str = "wishlist";

/// Storage key holding the display-theme preference.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Durable key-value persistence port.
///
/// Stores treat persisted data as a cache of in-memory truth: a read seeds
/// the session at activation, a write carries the whole serialized value
/// and is the last step of every mutating operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    async fn write(&self, key: &str, value: &str) -> AppResult<()>;

    async fn remove(&self, key: &str) -> AppResult<()>;
}
