use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the commitment-term directory exists (it is created lazily).
    pub upload_dir_present: bool,
}

/// GET /health -- service, database and storage health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = internhub_db::health_check(&state.pool).await.is_ok();
    let upload_dir_present = tokio::fs::metadata(state.terms.root())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        upload_dir_present,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
