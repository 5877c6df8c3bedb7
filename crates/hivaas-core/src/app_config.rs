use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_url: String,
    pub log_level: String,
    /// `None` leaves catalog requests without a timeout.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub share_phone: String,
    pub currency_symbol: String,
    pub page_size: usize,
    pub notice_millis: u64,
    pub recommended_count: usize,
}

impl AppConfig {
    #[must_use]
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_millis)
    }
}
