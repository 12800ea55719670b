use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use mostra_core::catalog;

use crate::models::StatsResponse;
use crate::state::AppState;

/// Aggregate counts over the whole catalog.
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let works = state.store.works();
    Json(catalog::stats(&works).into())
}
