use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the catalog session.
///
/// Defaults target the public Jikan v4 API; every field can be overridden
/// through a `MEGURU_*` environment variable (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote catalog API, without a trailing slash.
    pub api_base_url: String,
    /// Requested page size for search and top listings.
    pub page_size: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Directory holding the persisted key-value documents.
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.jikan.moe/v4".to_string(),
            page_size: 24,
            request_timeout_secs: 30,
            user_agent: "Meguru-Catalog-App/1.0".to_string(),
            data_dir: PathBuf::from(".meguru"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(url) = std::env::var("MEGURU_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Ok(Ok(size)) = std::env::var("MEGURU_PAGE_SIZE").map(|v| v.parse()) {
            config.page_size = size;
        }
        if let Ok(Ok(secs)) = std::env::var("MEGURU_REQUEST_TIMEOUT_SECS").map(|v| v.parse()) {
            config.request_timeout_secs = secs;
        }
        if let Ok(agent) = std::env::var("MEGURU_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Ok(dir) = std::env::var("MEGURU_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
