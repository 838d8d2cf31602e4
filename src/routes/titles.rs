use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::ResolutionOutcome,
    routes::AppState,
    services::TitleCard,
};

pub const NOT_FOUND_MESSAGE: &str = "Couldn't find such a title";

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    q: String,
}

/// Handler for title resolution endpoint
pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ResolveQuery>,
) -> AppResult<Json<TitleCard>> {
    tracing::info!(request_id = %request_id, query = %params.q, "Resolving title");

    match state.resolver.handle_query(&params.q).await? {
        ResolutionOutcome::Found(result) => {
            let card = state.presenter.card(&result).await;
            Ok(Json(card))
        }
        ResolutionOutcome::NotFound => Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string())),
    }
}
