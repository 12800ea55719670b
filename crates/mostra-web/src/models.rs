use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use mostra_core::{CatalogStats, WorkFilter, WorkType};

/// Welcome payload of the root endpoint.
#[derive(Debug, Serialize)]
pub struct Message {
    pub mensagem: String,
}

/// Aggregate counts payload. Field names are the published API contract.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_trabalhos: usize,
    pub total_apresentacoes: usize,
    pub total_exposicoes: usize,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        StatsResponse {
            total_trabalhos: stats.total_works,
            total_apresentacoes: stats.oral_presentations,
            total_exposicoes: stats.expositions,
        }
    }
}

/// Query parameters of the listing endpoints (published names).
#[derive(Debug, Default, Deserialize)]
pub struct WorksQuery {
    pub termo_titulo: Option<String>,
    pub autor: Option<String>,
    pub palavra_chave: Option<String>,
}

impl WorksQuery {
    pub fn into_filter(self, work_type: Option<WorkType>) -> WorkFilter {
        WorkFilter {
            work_type,
            title_term: self.termo_titulo,
            author: self.autor,
            key_word: self.palavra_chave,
        }
    }
}

/// JSON error body mirroring the published API shape (`{"detail": ...}`).
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Handler-level error carrying the HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
