use crate::entity::Currency;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8084";
pub const DEFAULT_RECORDS_PER_PAGE: i64 = 10;
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";
pub const DEFAULT_NOTICE_SECONDS: u64 = 3;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the wallet REST API
    pub api_base_url: String,

    /// Bearer token for authenticated requests
    pub access_token: Option<String>,

    /// Account whose activity is shown
    pub user_id: Option<i64>,

    /// Activities per page on the activity list
    pub records_per_page: i64,

    /// chrono pattern used to render activity dates
    pub date_format: String,

    /// How long status notices stay visible
    pub notice_duration: Duration,

    pub currency: Currency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            user_id: None,
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            notice_duration: Duration::from_secs(DEFAULT_NOTICE_SECONDS),
            currency: Currency::argentina(),
        }
    }
}

impl Config {
    /// Build configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_base_url: lookup("WALLET_API_URL").unwrap_or(defaults.api_base_url),
            access_token: lookup("WALLET_ACCESS_TOKEN").filter(|token| !token.trim().is_empty()),
            user_id: lookup("WALLET_USER_ID").and_then(|id| id.trim().parse().ok()),
            records_per_page: lookup("WALLET_RECORDS_PER_PAGE")
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(defaults.records_per_page),
            date_format: lookup("WALLET_DATE_FORMAT").unwrap_or(defaults.date_format),
            notice_duration: lookup("WALLET_NOTICE_SECONDS")
                .and_then(|n| n.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.notice_duration),
            currency: defaults.currency,
        }
    }
}
