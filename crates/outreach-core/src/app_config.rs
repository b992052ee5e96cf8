/// Runtime configuration for the outreach clients and dashboard.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the places-search backend.
    pub places_base_url: String,
    /// Base URL of the call-automation backend.
    pub call_base_url: String,
    /// Mapbox access token for address autocomplete. Geocoding is
    /// disabled when absent.
    pub mapbox_token: Option<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Fixed delay between call-status polls.
    pub poll_interval_ms: u64,
    /// Attempt budget for one call-status watcher.
    pub poll_max_attempts: u32,
    /// When set, search results without a usable phone number or beyond
    /// the requested radius are dropped.
    pub filter_results: bool,
    pub default_radius_km: f64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_base_url", &self.places_base_url)
            .field("call_base_url", &self.call_base_url)
            .field(
                "mapbox_token",
                &self.mapbox_token.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("poll_max_attempts", &self.poll_max_attempts)
            .field("filter_results", &self.filter_results)
            .field("default_radius_km", &self.default_radius_km)
            .finish()
    }
}
