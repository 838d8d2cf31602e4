use crate::{
    db::UsageLedger,
    error::AppResult,
    models::{ResolutionOutcome, ResolutionResult},
    services::{disambiguation::Disambiguator, link_resolver::LinkResolver, tmdb::TmdbApi},
};
use std::sync::Arc;

/// End-to-end query handling: search, disambiguate, resolve link, record usage
///
/// Holds no per-query state; concurrent queries share only the ledger.
#[derive(Clone)]
pub struct ResolutionService {
    disambiguator: Disambiguator,
    link_resolver: LinkResolver,
    ledger: Arc<dyn UsageLedger>,
}

impl ResolutionService {
    pub fn new(api: Arc<dyn TmdbApi>, ledger: Arc<dyn UsageLedger>) -> Self {
        Self {
            disambiguator: Disambiguator::new(api.clone()),
            link_resolver: LinkResolver::new(api),
            ledger,
        }
    }

    /// Resolves `query` to a single title with a viewing link.
    ///
    /// A candidate without a link is reported as `NotFound`, exactly like a
    /// query with no candidate. Usage is recorded once, only on `Found`.
    pub async fn handle_query(&self, query: &str) -> AppResult<ResolutionOutcome> {
        let Some(selection) = self.disambiguator.resolve(query).await? else {
            return Ok(ResolutionOutcome::NotFound);
        };

        let link = self
            .link_resolver
            .resolve_link(selection.kind, &selection.candidate)
            .await?;

        let Some(link) = link else {
            tracing::info!(
                query = %query,
                title = %selection.candidate.name,
                "Candidate has no viewing link in priority regions"
            );
            return Ok(ResolutionOutcome::NotFound);
        };

        let result = ResolutionResult {
            candidate: selection.candidate,
            kind: selection.kind,
            link,
        };

        self.ledger.record_usage(&result.candidate.name).await?;

        tracing::info!(
            query = %query,
            title = %result.candidate.name,
            kind = %result.kind,
            "Query resolved"
        );

        Ok(ResolutionOutcome::Found(result))
    }
}
