use std::path::PathBuf;

/// Process-wide settings, resolved once at startup and handed to the
/// components that need them.
#[derive(Clone)]
pub struct AppConfig {
    pub shop: String,
    pub access_token: String,
    pub api_version: String,
    /// Root under which every resource path is joined, without a trailing `/`.
    pub admin_api_url: String,
    /// Inventory location used for every inventory mutation. `None` means the
    /// client resolves the shop's default location when it connects.
    pub location_id: Option<i64>,
    pub cache_path: PathBuf,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_pages: usize,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shop", &self.shop)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("admin_api_url", &self.admin_api_url)
            .field("location_id", &self.location_id)
            .field("cache_path", &self.cache_path)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_pages", &self.max_pages)
            .field("log_level", &self.log_level)
            .finish()
    }
}
