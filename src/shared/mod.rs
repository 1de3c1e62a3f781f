pub mod config;
pub mod errors;
pub mod logging;
pub mod storage;

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
