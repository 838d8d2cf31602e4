use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{error::AppResult, models::UsageRecord, routes::AppState};

/// Resolved title names, most requested first
pub async fn history(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<String>>> {
    let records = state.ledger.ranked_snapshot().await?;
    Ok(Json(records.into_iter().map(|r| r.name).collect()))
}

/// Resolved titles with their request counts, most requested first
pub async fn stats(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<UsageRecord>>> {
    let records = state.ledger.ranked_snapshot().await?;
    tracing::debug!(titles = records.len(), "Serving usage stats");
    Ok(Json(records))
}
