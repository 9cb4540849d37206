// web_app/api/config.rs - Environment configuration and HTTP client setup
//
// Reads API keys and tuning knobs from the environment (with .env support)
// and builds the single reqwest client shared by the remote fetcher and the
// generative text client.

use std::env;
use std::time::Duration;

use crate::web_app::errors::FetchError;

/// Value shipped in sample .env files; treated as "no key"
const PLACEHOLDER_KEY: &str = "your_rapidapi_key_here";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub rapidapi_key: Option<String>,
    pub travel_api_base_url: String,
    pub travel_api_host: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub request_timeout: Duration,
    pub mock_delay: Duration,
    pub recommendation_debounce: Duration,
    pub max_remote_results: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rapidapi_key: None,
            travel_api_base_url: "https://booking-com.p.rapidapi.com".to_string(),
            travel_api_host: "booking-com.p.rapidapi.com".to_string(),
            gemini_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            request_timeout: Duration::from_secs(10),
            mock_delay: Duration::from_millis(1500),
            recommendation_debounce: Duration::from_millis(1500),
            max_remote_results: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let key = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty() && v != PLACEHOLDER_KEY)
        };
        let millis = |name: &str, default: Duration| {
            lookup(name)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let config = Self {
            rapidapi_key: key("RAPIDAPI_KEY"),
            travel_api_base_url: lookup("TRAVEL_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.travel_api_base_url),
            travel_api_host: lookup("TRAVEL_API_HOST").unwrap_or(defaults.travel_api_host),
            gemini_api_key: key("GEMINI_API_KEY"),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            request_timeout: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            mock_delay: millis("MOCK_DELAY_MS", defaults.mock_delay),
            recommendation_debounce: millis(
                "RECOMMENDATION_DEBOUNCE_MS",
                defaults.recommendation_debounce,
            ),
            max_remote_results: lookup("MAX_REMOTE_RESULTS")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_remote_results),
        };

        if config.rapidapi_key.is_none() {
            tracing::info!("RAPIDAPI_KEY not set, travel searches will use mock data");
        }
        config
    }
}

/// Create the shared HTTP client with an explicit request timeout
pub fn create_client(config: &AppConfig) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))
}
