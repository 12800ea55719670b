use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use mostra_core::{Work, catalog};

use crate::models::ApiError;
use crate::state::AppState;

/// The single work on the given page.
pub async fn by_page(
    State(state): State<Arc<AppState>>,
    Path(page_number): Path<u32>,
) -> Result<Json<Work>, ApiError> {
    let works = state.store.works();
    catalog::by_page(&works, page_number)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Trabalho na página {} não encontrado",
                page_number
            ))
        })
}

/// The single work with the exact (case-insensitive) title.
pub async fn by_title(
    State(state): State<Arc<AppState>>,
    Path(titulo): Path<String>,
) -> Result<Json<Work>, ApiError> {
    let works = state.store.works();
    catalog::by_title(&works, &titulo)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            ApiError::not_found(format!("Trabalho com título '{}' não encontrado", titulo))
        })
}
