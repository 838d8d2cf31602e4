use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::UsageLedger,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{Presenter, ResolutionService, TmdbApi},
};

pub mod titles;
pub mod usage;

/// Shared handler state; every collaborator is injected at construction
#[derive(Clone)]
pub struct AppState {
    pub resolver: ResolutionService,
    pub presenter: Presenter,
    pub ledger: Arc<dyn UsageLedger>,
}

impl AppState {
    pub fn new(api: Arc<dyn TmdbApi>, ledger: Arc<dyn UsageLedger>) -> Self {
        Self {
            resolver: ResolutionService::new(api.clone(), ledger.clone()),
            presenter: Presenter::new(api),
            ledger,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/titles/resolve", get(titles::resolve))
        .route("/history", get(usage::history))
        .route("/stats", get(usage::stats))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
