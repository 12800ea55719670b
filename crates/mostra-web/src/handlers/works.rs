use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use mostra_core::{Work, WorkType, catalog};

use crate::models::WorksQuery;
use crate::state::AppState;

fn list(state: &AppState, query: WorksQuery, work_type: Option<WorkType>) -> Vec<Work> {
    let works = state.store.works();
    let filter = query.into_filter(work_type);
    catalog::filter_works(&works, &filter)
        .into_iter()
        .cloned()
        .collect()
}

/// Every work in the annals, optionally filtered.
pub async fn list_all(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WorksQuery>,
) -> Json<Vec<Work>> {
    Json(list(&state, query, None))
}

/// Oral presentations only.
pub async fn list_presentations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WorksQuery>,
) -> Json<Vec<Work>> {
    Json(list(&state, query, Some(WorkType::OralPresentation)))
}

/// Expositions only.
pub async fn list_expositions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WorksQuery>,
) -> Json<Vec<Work>> {
    Json(list(&state, query, Some(WorkType::Exposition)))
}
