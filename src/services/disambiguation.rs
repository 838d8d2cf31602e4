use crate::{
    error::AppResult,
    models::{ApiSearchPage, ApiSearchResult, Candidate, MediaKind, Selection},
    services::tmdb::{decode, Endpoint, Params, TmdbApi},
};
use std::sync::Arc;

/// Picks one candidate for a query across the movie and series searches
#[derive(Clone)]
pub struct Disambiguator {
    api: Arc<dyn TmdbApi>,
}

impl Disambiguator {
    pub fn new(api: Arc<dyn TmdbApi>) -> Self {
        Self { api }
    }

    /// Runs both searches concurrently and selects by popularity.
    ///
    /// Both searches always run to completion before selection. Transport
    /// errors surface only after both have finished.
    pub async fn resolve(&self, query: &str) -> AppResult<Option<Selection>> {
        let (movie, series) = tokio::join!(
            self.top_result(MediaKind::Movie, query),
            self.top_result(MediaKind::Series, query),
        );
        let (movie, series) = (movie?, series?);

        let selection = choose(movie, series);

        match &selection {
            Some(selection) => tracing::info!(
                query = %query,
                kind = %selection.kind,
                title = %selection.candidate.name,
                popularity = selection.candidate.popularity,
                "Candidate selected"
            ),
            None => tracing::info!(query = %query, "No candidate for query"),
        }

        Ok(selection)
    }

    /// First hit of one search, or `None` for an empty or unusable page
    async fn top_result(&self, kind: MediaKind, query: &str) -> AppResult<Option<Candidate>> {
        let endpoint = Endpoint::Search(kind);
        let params: Params = vec![("query", query.to_string()), ("page", "1".to_string())];

        let body = self.api.fetch(endpoint, params).await?;
        let page: Option<ApiSearchPage> = decode(endpoint, body);

        let first = page.and_then(|p| p.results.into_iter().next());
        let raw: Option<ApiSearchResult> = decode(endpoint, first);
        Ok(raw.and_then(|raw| Candidate::from_search_result(kind, raw)))
    }
}

/// Selection rule between the top movie and top series hit.
///
/// Series wins only on strictly greater popularity, so ties go to Movie.
pub fn choose(movie: Option<Candidate>, series: Option<Candidate>) -> Option<Selection> {
    match (movie, series) {
        (Some(movie), Some(series)) => {
            if series.popularity > movie.popularity {
                Some(Selection {
                    candidate: series,
                    kind: MediaKind::Series,
                })
            } else {
                Some(Selection {
                    candidate: movie,
                    kind: MediaKind::Movie,
                })
            }
        }
        (Some(movie), None) => Some(Selection {
            candidate: movie,
            kind: MediaKind::Movie,
        }),
        (None, Some(series)) => Some(Selection {
            candidate: series,
            kind: MediaKind::Series,
        }),
        (None, None) => None,
    }
}
