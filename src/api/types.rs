use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// One unconfirmed search result from TMDB
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateRecord {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl CandidateRecord {
    /// Year component of the release date, if the provider gave one
    pub fn year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.get(..4))
    }
}

/// Authoritative metadata for a single movie, fetched by id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub imdb_id: Option<String>,
}

impl MovieDetail {
    pub fn year(&self) -> Option<&str> {
        self.release_date.get(..4)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Errors that can occur when talking to TMDB
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Movie not found: {0}")]
    NotFound(u64),

    #[error("TMDB rejected the API key")]
    Unauthorized,

    #[error("Rate limited by TMDB")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Incomplete data for movie {id}: missing {field}")]
    IncompleteData { id: u64, field: String },

    #[error("API returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Client not configured: TMDB_API_KEY must be set")]
    NotConfigured,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}
