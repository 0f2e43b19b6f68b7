//! Handlers for the dashboard views.
//!
//! All four aggregations are read-only and evaluated against today's date.

use axum::extract::{Query, State};
use axum::Json;
use internhub_core::dashboard::ExpiryWindow;
use internhub_db::models::dashboard::{
    CompletedCycleIntern, DashboardSummary, ExpiringContract, InternOnVacation,
};
use internhub_db::repositories::DashboardRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::today;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /dashboard/expiring-contracts`.
#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    /// Window length in days: 7, 30 or 60 (default 30).
    pub days: Option<i64>,
}

/// GET /api/v1/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/dashboard/expiring-contracts?days=N
pub async fn expiring_contracts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ExpiringParams>,
) -> AppResult<Json<DataResponse<Vec<ExpiringContract>>>> {
    let window = match params.days {
        Some(days) => ExpiryWindow::from_days(days)?,
        None => ExpiryWindow::DEFAULT,
    };
    let rows = DashboardRepo::expiring_contracts(&state.pool, today(), window).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/dashboard/on-vacation
pub async fn on_vacation(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<InternOnVacation>>>> {
    let rows = DashboardRepo::interns_on_vacation(&state.pool, today()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/dashboard/completed-cycles
pub async fn completed_cycles(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CompletedCycleIntern>>>> {
    let rows = DashboardRepo::completed_cycles(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}
