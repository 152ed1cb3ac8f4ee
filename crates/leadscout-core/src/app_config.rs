use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub sheets_api_key: Option<String>,
    pub log_level: String,
    pub qualification_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub max_concurrent_fetches: usize,
    pub places_timeout_secs: u64,
    pub places_page_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field(
                "sheets_api_key",
                &self.sheets_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("qualification_path", &self.qualification_path)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_user_agent", &self.fetch_user_agent)
            .field("max_concurrent_fetches", &self.max_concurrent_fetches)
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("places_page_delay_ms", &self.places_page_delay_ms)
            .finish()
    }
}
