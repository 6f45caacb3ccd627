//! App Configuration

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_NOTICE_TTL_MS: u32 = 3000;

/// Knobs for the whole app, constructed once at mount.
#[derive(Clone, Debug)]
pub struct ShopConfig {
    pub api_base: String,
    pub poll_interval_ms: u32,
    pub request_timeout_ms: u32,
    /// How long a notice stays on screen before auto-dismissing
    pub notice_ttl_ms: u32,
    /// When set, filter changes re-fetch the catalog with the filter as
    /// query parameters instead of narrowing the cached catalog locally.
    pub server_filtering: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            server_filtering: false,
        }
    }
}
