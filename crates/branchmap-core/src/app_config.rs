use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub profile_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Delay between pagination requests within one tile. Next-page tokens
    /// are not valid immediately after being issued upstream.
    pub page_delay_ms: u64,
    /// Delay between per-branch detail lookups.
    pub detail_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field("profile_path", &self.profile_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("detail_delay_ms", &self.detail_delay_ms)
            .finish()
    }
}
