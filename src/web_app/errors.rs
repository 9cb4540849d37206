// web_app/errors.rs - Error taxonomy for the search pipeline
//
// Validation errors are local and synchronous. Fetch errors are caught at
// the remote boundary and turned into an advisory message plus a mock
// fallback, so none of these ever reaches the presentation layer raw.

use crate::web_app::model::Domain;
use thiserror::Error;

/// One or more human-readable violations for a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

impl ValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}

fn join_violations(violations: &[String]) -> String {
    if violations.is_empty() {
        return String::new();
    }
    format!("{}.", violations.join(". "))
}

/// User-facing message category for a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidParameters,
    Auth,
    RateLimited,
    Malformed,
    Network,
    Other,
}

/// Failure of a remote search or text-generation call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// 4xx other than auth and rate limiting
    #[error("Invalid search parameters (HTTP {status}): {detail}")]
    InvalidParameters { status: u16, detail: String },

    /// Provider could not resolve the free-text location in step one
    #[error("No provider location matches \"{0}\"")]
    LocationNotFound(String),

    #[error("API authentication failed (HTTP {status})")]
    Auth { status: u16 },

    #[error("API rate limit exceeded")]
    RateLimited,

    /// Any other non-2xx response
    #[error("Search failed (HTTP {status})")]
    Status { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    /// Body was not the JSON shape we can read
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("API key is not configured")]
    NotConfigured,

    #[error("No remote search available for {0}")]
    Unsupported(Domain),
}

impl FetchError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        match status {
            401 | 403 => FetchError::Auth { status },
            429 => FetchError::RateLimited,
            400..=499 => FetchError::InvalidParameters {
                status,
                detail: detail.into(),
            },
            _ => FetchError::Status { status },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::InvalidParameters { .. } | FetchError::LocationNotFound(_) => {
                ErrorCategory::InvalidParameters
            }
            FetchError::Auth { .. } | FetchError::NotConfigured => ErrorCategory::Auth,
            FetchError::RateLimited => ErrorCategory::RateLimited,
            FetchError::Malformed(_) => ErrorCategory::Malformed,
            FetchError::Network(_) | FetchError::Timeout => ErrorCategory::Network,
            FetchError::Status { .. } | FetchError::Unsupported(_) => ErrorCategory::Other,
        }
    }

    /// Advisory banner text shown next to the fallback results
    pub fn user_message(&self, domain: Domain) -> String {
        let detail = match self.category() {
            ErrorCategory::InvalidParameters => {
                "The search parameters are invalid. Please check your locations and dates.".to_string()
            }
            ErrorCategory::Auth => {
                "Authentication failed. Please check the API configuration.".to_string()
            }
            ErrorCategory::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            ErrorCategory::Malformed => {
                "The provider returned an unreadable response.".to_string()
            }
            ErrorCategory::Network => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            ErrorCategory::Other => format!("{}. Please try again later.", self),
        };
        format!("Failed to search {}. {} Showing sample results instead.", domain, detail)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_decode() {
            FetchError::Malformed(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::from_status(status.as_u16(), error.to_string())
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Malformed(error.to_string())
    }
}
