use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

/// Content type of a search candidate
///
/// Governs which TMDB fields carry the display name and date, and which path
/// segment the watch-provider lookup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// TMDB path segment (`search/{segment}`, `{segment}/{id}/watch/providers`)
    pub fn path_segment(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }

    /// Human-facing label used on title cards
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Series => "TV show",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// One search result, interpreted under a single [`MediaKind`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: u64,
    /// `title` for movies, `name` for series
    pub name: String,
    /// `release_date` for movies, `first_air_date` for series
    pub release_date: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: u64,
    pub overview: String,
    pub poster_path: Option<String>,
}

impl Candidate {
    /// Maps a raw search hit onto the kind's naming convention.
    ///
    /// Returns `None` when the hit carries no display name for this kind.
    pub fn from_search_result(kind: MediaKind, raw: ApiSearchResult) -> Option<Self> {
        let (name, release_date) = match kind {
            MediaKind::Movie => (raw.title, raw.release_date),
            MediaKind::Series => (raw.name, raw.first_air_date),
        };

        Some(Candidate {
            id: raw.id,
            name: name?,
            release_date: release_date.filter(|d| !d.is_empty()),
            popularity: raw.popularity,
            vote_average: raw.vote_average,
            vote_count: raw.vote_count,
            overview: raw.overview.unwrap_or_default(),
            poster_path: raw.poster_path,
        })
    }

    /// Year component of the release/first-air date
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.year())
            .ok()
            .or_else(|| date.get(..4).and_then(|y| y.parse().ok()))
    }
}

/// A disambiguated candidate together with the kind it was selected under
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub candidate: Candidate,
    pub kind: MediaKind,
}

/// Outcome of a successful resolution, handed to presentation
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub candidate: Candidate,
    pub kind: MediaKind,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Found(ResolutionResult),
    NotFound,
}

/// Per-title usage counter row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UsageRecord {
    pub name: String,
    pub count: i64,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response from GET /search/movie and GET /search/tv
///
/// Hits stay untyped; only the first one is ever decoded into
/// [`ApiSearchResult`], so later malformed hits cannot spoil the page.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSearchPage {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

/// Raw search hit; movies and series populate different name/date fields
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSearchResult {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Response from GET /{movie|tv}/{id}/watch/providers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiWatchProviders {
    /// Keyed by region code ("US", "DE", ...)
    #[serde(default)]
    pub results: HashMap<String, ApiRegionProviders>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRegionProviders {
    #[serde(default)]
    pub link: Option<String>,
}

/// Response from GET /configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfiguration {
    pub images: ApiImageConfiguration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiImageConfiguration {
    pub base_url: String,
    #[serde(default)]
    pub poster_sizes: Vec<String>,
}
