use crate::{
    error::AppResult,
    models::{ApiWatchProviders, Candidate, MediaKind},
    services::tmdb::{decode, Endpoint, TmdbApi},
};
use std::sync::Arc;

/// Regions consulted for a viewing link, highest priority first
pub const REGION_PRIORITY: [&str; 5] = ["US", "UK", "DE", "KR", "RU"];

/// Finds a regional viewing link for a selected candidate
#[derive(Clone)]
pub struct LinkResolver {
    api: Arc<dyn TmdbApi>,
}

impl LinkResolver {
    pub fn new(api: Arc<dyn TmdbApi>) -> Self {
        Self { api }
    }

    pub async fn resolve_link(
        &self,
        kind: MediaKind,
        candidate: &Candidate,
    ) -> AppResult<Option<String>> {
        let endpoint = Endpoint::WatchProviders {
            kind,
            id: candidate.id,
        };

        let body = self.api.fetch(endpoint, Vec::new()).await?;
        let Some(providers) = decode::<ApiWatchProviders>(endpoint, body) else {
            tracing::info!(title = %candidate.name, kind = %kind, "No watch-provider data");
            return Ok(None);
        };

        let link = pick_region_link(&providers);

        tracing::debug!(
            title = %candidate.name,
            regions = providers.results.len(),
            found = link.is_some(),
            "Watch providers inspected"
        );

        Ok(link)
    }
}

/// Link of the first priority region present in the provider map.
///
/// The first present region decides: if its link is missing or empty the
/// result is `None`, later regions are not consulted.
pub fn pick_region_link(providers: &ApiWatchProviders) -> Option<String> {
    let region = REGION_PRIORITY
        .iter()
        .find_map(|code| providers.results.get(*code))?;

    region.link.clone().filter(|link| !link.is_empty())
}
