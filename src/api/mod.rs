mod client;
mod types;

pub use client::TmdbClient;
pub use types::{ApiConfig, ApiError, CandidateRecord, MovieDetail, DEFAULT_BASE_URL};

use std::env;

/// Environment variable names for TMDB client configuration
pub const ENV_TMDB_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_TMDB_BASE_URL: &str = "TMDB_BASE_URL";

/// Source of movie metadata.
///
/// Implemented by [`TmdbClient`]; tests substitute their own provider.
pub trait MetadataProvider {
    /// Search for movies by title, optionally narrowed to a release year.
    /// Results are in the provider's relevance order.
    fn search_movies(&self, query: &str, year: Option<&str>)
        -> Result<Vec<CandidateRecord>, ApiError>;

    /// Fetch the full record for one movie id
    fn movie_details(&self, id: u64) -> Result<MovieDetail, ApiError>;
}

/// Load API configuration from environment variables
///
/// Required:
/// - `TMDB_API_KEY`: TMDB v3 API key
///
/// Optional:
/// - `TMDB_BASE_URL`: override the API root (useful for proxies)
///
/// These can be set in a `.env` file in the working directory.
pub fn config_from_env() -> ApiConfig {
    let api_key = env::var(ENV_TMDB_API_KEY).unwrap_or_default();
    let config = ApiConfig::new(api_key);

    match env::var(ENV_TMDB_BASE_URL) {
        Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
        _ => config,
    }
}
