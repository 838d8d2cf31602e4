//! TMDB API client
//!
//! Every call is a single GET with the shared `api_key` credential appended.
//! A response counts as data only when its status class is 2xx and its body
//! decodes as JSON; anything else is reported as "no data" rather than an
//! error, so callers degrade to an empty result instead of failing the query.

use crate::{error::AppResult, models::MediaKind};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fmt::Display, time::Duration};

/// Named TMDB endpoints used by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search(MediaKind),
    Configuration,
    WatchProviders { kind: MediaKind, id: u64 },
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Search(kind) => format!("search/{}", kind.path_segment()),
            Endpoint::Configuration => "configuration".to_string(),
            Endpoint::WatchProviders { kind, id } => {
                format!("{}/{}/watch/providers", kind.path_segment(), id)
            }
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Query parameters for a single call, excluding the credential
pub type Params = Vec<(&'static str, String)>;

/// Outbound access to TMDB
///
/// `Ok(None)` means the endpoint answered without usable data (non-2xx status
/// or undecodable body). `Err` is reserved for transport failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint, params: Params) -> AppResult<Option<Value>>;
}

/// Success is judged on the leading digit of the status code only
pub fn is_success_status(status: u16) -> bool {
    status / 100 == 2
}

/// Decodes a fetched body into a typed response
///
/// A structural mismatch is logged and treated the same as "no data".
pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: Option<Value>) -> Option<T> {
    let body = body?;
    match serde_json::from_value(body) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!(
                endpoint = %endpoint,
                error = %e,
                "Malformed TMDB response, treating as empty"
            );
            None
        }
    }
}

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.api_url, endpoint.path())
    }
}

#[async_trait::async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch(&self, endpoint: Endpoint, mut params: Params) -> AppResult<Option<Value>> {
        let url = self.url_for(endpoint);
        params.push(("api_key", self.api_key.clone()));

        tracing::debug!(endpoint = %endpoint, "Fetching from TMDB");

        let response = self.http_client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !is_success_status(status.as_u16()) {
            tracing::warn!(
                endpoint = %endpoint,
                status = %status,
                "TMDB returned non-success status, treating as empty"
            );
            return Ok(None);
        }

        let text = response.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(Some(body)),
            Err(e) => {
                tracing::warn!(
                    endpoint = %endpoint,
                    error = %e,
                    "TMDB body is not JSON, treating as empty"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiSearchPage;
    use serde_json::json;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Search(MediaKind::Movie).path(), "search/movie");
        assert_eq!(Endpoint::Search(MediaKind::Series).path(), "search/tv");
        assert_eq!(Endpoint::Configuration.path(), "configuration");
        assert_eq!(
            Endpoint::WatchProviders {
                kind: MediaKind::Series,
                id: 1399
            }
            .path(),
            "tv/1399/watch/providers"
        );
    }

    #[test]
    fn test_success_is_leading_digit_two() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(299));
        assert!(!is_success_status(199));
        assert!(!is_success_status(301));
        assert!(!is_success_status(404));
        assert!(!is_success_status(422));
        assert!(!is_success_status(503));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = TmdbClient::new(
            "key".to_string(),
            "https://api.themoviedb.org/3/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.url_for(Endpoint::Search(MediaKind::Movie)),
            "https://api.themoviedb.org/3/search/movie"
        );
    }

    #[test]
    fn test_decode_absent_body_is_none() {
        let decoded: Option<ApiSearchPage> = decode(Endpoint::Configuration, None);
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_malformed_body_is_none() {
        let body = json!({"results": "not a list"});
        let decoded: Option<ApiSearchPage> =
            decode(Endpoint::Search(MediaKind::Movie), Some(body));
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_well_formed_body() {
        let body = json!({"page": 1, "results": [{"id": 7, "title": "Seven"}]});
        let decoded: ApiSearchPage =
            decode(Endpoint::Search(MediaKind::Movie), Some(body)).unwrap();
        assert_eq!(decoded.results.len(), 1);
        assert_eq!(decoded.results[0]["id"], 7);
    }
}
