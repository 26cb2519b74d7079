//! Resolves a title/year guess to a single authoritative movie record.
//!
//! The resolver only searches and fetches. Choosing between several
//! candidates is left to the caller through the `choose` closure passed to
//! [`MetadataResolver::resolve`].

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiConfig, ApiError, CandidateRecord, MetadataProvider, MovieDetail, TmdbClient};
use crate::parser::ParsedGuess;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Cannot search with an empty title")]
    EmptyTitle,

    #[error("No metadata found for \"{title}\"{}", year_suffix(.year))]
    NoMatch { title: String, year: Option<String> },

    #[error("Movie {id} is not known to the provider")]
    Lookup { id: u64 },

    #[error("Request failed ({context}): {source}")]
    Transport {
        context: String,
        #[source]
        source: ApiError,
    },

    #[error("No candidate selected")]
    SelectionCancelled,

    #[error("Metadata provider not configured: {0}")]
    NotConfigured(#[source] ApiError),
}

fn year_suffix(year: &Option<String>) -> String {
    year.as_ref()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default()
}

pub struct MetadataResolver<P = TmdbClient> {
    provider: P,
}

impl MetadataResolver<TmdbClient> {
    /// Build a resolver backed by TMDB. The API key travels inside `config`.
    pub fn from_config(config: ApiConfig) -> Result<Self, ResolveError> {
        let client = TmdbClient::new(config).map_err(|e| match e {
            ApiError::NotConfigured => ResolveError::NotConfigured(e),
            other => ResolveError::Transport {
                context: "creating HTTP client".to_string(),
                source: other,
            },
        })?;

        Ok(Self::new(client))
    }
}

impl<P: MetadataProvider> MetadataResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Query the provider for candidates. An empty result is not an error.
    pub fn search(
        &self,
        title: &str,
        year: Option<&str>,
    ) -> Result<Vec<CandidateRecord>, ResolveError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ResolveError::EmptyTitle);
        }

        debug!(title, year = ?year, "Searching for candidates");

        self.provider
            .search_movies(title, year)
            .map_err(|source| ResolveError::Transport {
                context: format!("search for \"{}\"{}", title, year_suffix(&year.map(String::from))),
                source,
            })
    }

    /// Fetch the detail record for one candidate id. Not retried.
    pub fn fetch_detail(&self, id: u64) -> Result<MovieDetail, ResolveError> {
        debug!(id, "Fetching detail");

        self.provider.movie_details(id).map_err(|source| match source {
            ApiError::NotFound(id) => ResolveError::Lookup { id },
            source => ResolveError::Transport {
                context: format!("details for movie {}", id),
                source,
            },
        })
    }

    /// Search for `guess`, let `choose` pick a candidate index, and fetch
    /// its detail record.
    ///
    /// `choose` is only called with a non-empty slice. Returning `None` (or an
    /// index out of range) cancels the resolution.
    pub fn resolve<F>(&self, guess: &ParsedGuess, choose: F) -> Result<MovieDetail, ResolveError>
    where
        F: FnOnce(&[CandidateRecord]) -> Option<usize>,
    {
        let candidates = self.search(&guess.title, guess.year())?;

        if candidates.is_empty() {
            warn!(title = %guess.title, year = ?guess.year, "No candidates found");
            return Err(ResolveError::NoMatch {
                title: guess.title.clone(),
                year: guess.year.clone(),
            });
        }

        info!(count = candidates.len(), "Found candidates");

        let chosen = choose(&candidates)
            .and_then(|index| candidates.get(index))
            .ok_or(ResolveError::SelectionCancelled)?;

        debug!(id = chosen.id, title = %chosen.title, "Candidate chosen");

        self.fetch_detail(chosen.id)
    }
}
