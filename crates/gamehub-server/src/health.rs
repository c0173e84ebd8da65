use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::state::{AppState, CatalogStatus};

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: CatalogInfo,
}

#[derive(Serialize)]
pub struct CatalogInfo {
    pub state: &'static str,
    pub games: usize,
    pub categories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogInfo {
    fn from_status(status: &CatalogStatus) -> Self {
        let (games, categories, error) = match status {
            CatalogStatus::Ready(catalog) => (catalog.len(), catalog.categories().len(), None),
            CatalogStatus::Failed(reason) => (0, 0, Some(reason.clone())),
            CatalogStatus::Loading => (0, 0, None),
        };
        Self {
            state: status.label(),
            games,
            categories,
            error,
        }
    }
}

/// Liveness: the process is up. Catalog state is reported, not judged.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.status().await;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        catalog: CatalogInfo::from_status(&status),
    })
}

/// Readiness: only ready once the catalog has loaded.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.status().await {
        CatalogStatus::Ready(_) => (StatusCode::OK, "ready"),
        CatalogStatus::Loading => (StatusCode::SERVICE_UNAVAILABLE, "not ready: catalog loading"),
        CatalogStatus::Failed(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "not ready: catalog failed to load",
        ),
    }
}
