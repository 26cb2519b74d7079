use super::types::{ApiConfig, ApiError, CandidateRecord, MovieDetail};
use super::MetadataProvider;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Body of `GET /search/movie`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<CandidateRecord>,
}

/// TMDB HTTP API client
pub struct TmdbClient {
    client: Client,
    config: ApiConfig,
}

impl TmdbClient {
    /// Create a new TMDB client with the given configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if !config.is_configured() {
            return Err(ApiError::NotConfigured);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let response = request
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()?;
        let status = response.status();

        debug!("Response status: {}", status);

        let body = response.text()?;
        Ok((status, body))
    }
}

impl MetadataProvider for TmdbClient {
    fn search_movies(
        &self,
        query: &str,
        year: Option<&str>,
    ) -> Result<Vec<CandidateRecord>, ApiError> {
        let url = format!("{}/search/movie", self.config.base_url);

        debug!(query, year = ?year, "TMDB movie search");

        let mut request = self.client.get(&url).query(&[("query", query)]);
        if let Some(year) = year {
            request = request.query(&[("year", year)]);
        }

        let (status, body) = self.send(request)?;
        check_status(status, &body, None)?;

        let candidates = parse_search_response(&body)?;
        info!(
            query,
            count = candidates.len(),
            "TMDB search returned candidates"
        );

        Ok(candidates)
    }

    fn movie_details(&self, id: u64) -> Result<MovieDetail, ApiError> {
        let url = format!("{}/movie/{}", self.config.base_url, id);

        debug!(id, "TMDB get movie");

        let (status, body) = self.send(self.client.get(&url))?;
        check_status(status, &body, Some(id))?;

        let detail = parse_movie_detail(id, &body)?;
        info!(id, title = %detail.title, "Fetched movie details");

        Ok(detail)
    }
}

/// Map non-success statuses to errors; `id` enables the 404 mapping for
/// detail lookups.
fn check_status(status: StatusCode, body: &str, id: Option<u64>) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    match (status, id) {
        (StatusCode::UNAUTHORIZED, _) => Err(ApiError::Unauthorized),
        (StatusCode::TOO_MANY_REQUESTS, _) => Err(ApiError::RateLimited),
        (StatusCode::NOT_FOUND, Some(id)) => Err(ApiError::NotFound(id)),
        _ => Err(ApiError::ServerError {
            status: status.as_u16(),
            message: error_message(body),
        }),
    }
}

/// TMDB error bodies carry a `status_message`; fall back to the raw body
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        status_message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.status_message)
        .unwrap_or_else(|_| body.trim().to_string())
}

pub(crate) fn parse_search_response(body: &str) -> Result<Vec<CandidateRecord>, ApiError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::ParseError(format!("search response: {}", e)))?;

    Ok(response.results)
}

pub(crate) fn parse_movie_detail(id: u64, body: &str) -> Result<MovieDetail, ApiError> {
    let detail: MovieDetail = serde_json::from_str(body)
        .map_err(|e| ApiError::ParseError(format!("movie {}: {}", id, e)))?;

    if detail.title.trim().is_empty() {
        return Err(ApiError::IncompleteData {
            id,
            field: "title".to_string(),
        });
    }

    let has_year = detail
        .year()
        .is_some_and(|y| y.bytes().all(|b| b.is_ascii_digit()));
    if !has_year {
        return Err(ApiError::IncompleteData {
            id,
            field: "release date".to_string(),
        });
    }

    Ok(detail)
}
