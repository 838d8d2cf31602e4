#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use kinofox::{
    db::{create_pool, SqliteUsageLedger},
    error::AppResult,
    services::tmdb::{Endpoint, Params, TmdbApi},
};
use serde_json::{json, Value};

/// Canned TMDB responses keyed by endpoint family
#[derive(Default)]
pub struct StubTmdb {
    pub movie_search: Option<Value>,
    pub series_search: Option<Value>,
    pub providers: Option<Value>,
    pub configuration: Option<Value>,
    pub calls: Mutex<Vec<Endpoint>>,
}

impl StubTmdb {
    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TmdbApi for StubTmdb {
    async fn fetch(&self, endpoint: Endpoint, _params: Params) -> AppResult<Option<Value>> {
        self.calls.lock().unwrap().push(endpoint);

        let body = match endpoint {
            Endpoint::Search(kinofox::models::MediaKind::Movie) => self.movie_search.clone(),
            Endpoint::Search(kinofox::models::MediaKind::Series) => self.series_search.clone(),
            Endpoint::WatchProviders { .. } => self.providers.clone(),
            Endpoint::Configuration => self.configuration.clone(),
        };
        Ok(body)
    }
}

pub fn search_page(hits: Value) -> Option<Value> {
    Some(json!({ "page": 1, "results": hits }))
}

pub fn empty_page() -> Option<Value> {
    search_page(json!([]))
}

pub fn inception_movie_search() -> Option<Value> {
    search_page(json!([{
        "id": 27205,
        "title": "Inception",
        "release_date": "2010-07-15",
        "popularity": 50.0,
        "vote_average": 8.4,
        "vote_count": 36000,
        "overview": "Cobb steals secrets from dreams.",
        "poster_path": "/inception.jpg"
    }]))
}

pub fn us_providers(link: &str) -> Option<Value> {
    Some(json!({ "id": 27205, "results": { "US": { "link": link } } }))
}

pub fn image_configuration() -> Option<Value> {
    Some(json!({
        "images": {
            "base_url": "http://image.tmdb.org/t/p/",
            "poster_sizes": ["w92", "w185", "original"]
        }
    }))
}

pub async fn memory_ledger() -> Arc<SqliteUsageLedger> {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    Arc::new(SqliteUsageLedger::new(pool))
}
