use crate::{
    error::AppResult,
    models::{ApiConfiguration, ResolutionResult},
    services::tmdb::{decode, Endpoint, TmdbApi},
};
use serde::Serialize;
use std::sync::Arc;

/// Presentation-ready view of a resolved title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleCard {
    pub name: String,
    pub year: Option<i32>,
    pub kind: String,
    pub rating: f64,
    pub votes: u64,
    pub votes_label: String,
    pub overview: String,
    pub link: String,
    pub poster_url: Option<String>,
    /// Plain-text reply body
    pub caption: String,
}

impl TitleCard {
    pub fn new(result: &ResolutionResult, poster_url: Option<String>) -> Self {
        let candidate = &result.candidate;
        let mut card = Self {
            name: candidate.name.clone(),
            year: candidate.release_year(),
            kind: result.kind.label().to_string(),
            rating: candidate.vote_average,
            votes: candidate.vote_count,
            votes_label: votes_label(candidate.vote_count),
            overview: candidate.overview.clone(),
            link: result.link.clone(),
            poster_url,
            caption: String::new(),
        };
        card.caption = card.render_caption();
        card
    }

    fn render_caption(&self) -> String {
        let year = self
            .year
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();

        let mut text = format!("{}{}  {}\n", self.name, year, self.kind);
        text.push_str(&format!("Rating: {} ({})\n", self.rating, self.votes_label));
        if !self.overview.is_empty() {
            text.push_str(&self.overview);
            text.push('\n');
        }
        text.push_str(&self.link);
        text
    }
}

/// Vote count in thousands, truncated to one decimal: 1299 -> "1.2k"
pub fn votes_label(votes: u64) -> String {
    format!("{:.1}k", (votes / 100) as f64 / 10.0)
}

/// Poster URL: image base, largest poster size, then the title's path
pub fn poster_url(config: &ApiConfiguration, poster_path: Option<&str>) -> Option<String> {
    let poster_path = poster_path.filter(|p| !p.is_empty())?;
    let size = config.images.poster_sizes.last()?;
    Some(format!("{}{}{}", config.images.base_url, size, poster_path))
}

/// Builds title cards, fetching image configuration from TMDB
#[derive(Clone)]
pub struct Presenter {
    api: Arc<dyn TmdbApi>,
}

impl Presenter {
    pub fn new(api: Arc<dyn TmdbApi>) -> Self {
        Self { api }
    }

    /// A card is always produced; a missing configuration only drops the poster.
    pub async fn card(&self, result: &ResolutionResult) -> TitleCard {
        let poster = match self.image_configuration().await {
            Ok(Some(config)) => poster_url(&config, result.candidate.poster_path.as_deref()),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Image configuration fetch failed, omitting poster");
                None
            }
        };

        TitleCard::new(result, poster)
    }

    async fn image_configuration(&self) -> AppResult<Option<ApiConfiguration>> {
        let endpoint = Endpoint::Configuration;
        let body = self.api.fetch(endpoint, Vec::new()).await?;
        Ok(decode(endpoint, body))
    }
}
