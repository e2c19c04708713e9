use std::time::Duration;

use dexter_api::DEFAULT_BASE_URL;

/// Settings for [`DexClient`](crate::DexClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without the trailing endpoint path
    pub base_url: String,
    /// How many list entries the catalog fetch asks for
    pub catalog_limit: u32,
    /// Detail requests in flight at once while assembling the catalog
    pub detail_concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_limit: 1000,
            detail_concurrency: 16,
            timeout: Duration::from_secs(30),
            user_agent: concat!("dexter-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_catalog_limit(mut self, limit: u32) -> Self {
        self.catalog_limit = limit;
        self
    }

    /// Clamped to at least one request
    pub fn with_detail_concurrency(mut self, concurrency: usize) -> Self {
        self.detail_concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
