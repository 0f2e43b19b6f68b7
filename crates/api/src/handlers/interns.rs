//! Handlers for the `/interns` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use internhub_core::dashboard::is_completed_cycle;
use internhub_core::intern::{validate_name, validate_shift};
use internhub_core::status::{ContractStatus, InternStatus};
use internhub_core::types::DbId;
use internhub_db::models::contract::Contract;
use internhub_db::models::intern::{CreateIntern, Intern, InternListParams, UpdateIntern};
use internhub_db::models::vacation::{Vacation, VacationBalance};
use internhub_db::repositories::{CommitmentTermRepo, ContractRepo, InternRepo, VacationRepo};
use internhub_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything recorded about one intern.
#[derive(Debug, Serialize)]
pub struct InternOverview {
    pub intern: Intern,
    pub contracts: Vec<Contract>,
    pub vacations: Vec<Vacation>,
    pub vacation_balance: VacationBalance,
    /// Whether the intern has used up every permitted contract.
    pub cycle_completed: bool,
}

/// Load an intern or fail with 404. Shared by the nested resources.
pub(crate) async fn ensure_intern(pool: &DbPool, id: DbId) -> AppResult<Intern> {
    InternRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("Intern", id))
}

/// POST /api/v1/interns
///
/// New interns always start Active.
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateIntern>,
) -> AppResult<(StatusCode, Json<DataResponse<Intern>>)> {
    validate_name(&input.name)?;
    validate_shift(input.shift.as_deref())?;

    let intern = InternRepo::create(&state.pool, &input).await?;
    tracing::info!(intern_id = intern.id, "Intern created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: intern })))
}

/// GET /api/v1/interns?search=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<InternListParams>,
) -> AppResult<Json<DataResponse<Vec<Intern>>>> {
    let interns = InternRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(DataResponse { data: interns }))
}

/// GET /api/v1/interns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Intern>>> {
    let intern = ensure_intern(&state.pool, id).await?;
    Ok(Json(DataResponse { data: intern }))
}

/// PUT /api/v1/interns/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIntern>,
) -> AppResult<Json<DataResponse<Intern>>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    validate_shift(input.shift.as_deref())?;

    let intern = InternRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Intern", id))?;
    tracing::info!(intern_id = id, "Intern updated");
    Ok(Json(DataResponse { data: intern }))
}

/// DELETE /api/v1/interns/{id}
///
/// Removes the intern with all contracts, vacations and term records.
/// Stored term files are removed from disk afterwards.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let term_paths = CommitmentTermRepo::file_paths_for_intern(&state.pool, id).await?;

    if !InternRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Intern", id));
    }

    for path in term_paths {
        if let Err(e) = state.terms.remove(std::path::Path::new(&path)).await {
            tracing::warn!(error = %e, path = %path, "Failed to remove commitment term file");
        }
    }

    tracing::info!(intern_id = id, "Intern deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/interns/{id}/activate
pub async fn activate(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Intern>>> {
    set_status(&state, id, InternStatus::Active).await
}

/// POST /api/v1/interns/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Intern>>> {
    set_status(&state, id, InternStatus::Inactive).await
}

/// GET /api/v1/interns/{id}/overview
pub async fn overview(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<InternOverview>>> {
    let intern = ensure_intern(&state.pool, id).await?;
    let contracts = ContractRepo::list_by_intern(&state.pool, id).await?;
    let vacations = VacationRepo::list_by_intern(&state.pool, id).await?;
    let vacation_balance = VacationRepo::balance_for_intern(&state.pool, id).await?;

    let statuses: Vec<ContractStatus> = contracts
        .iter()
        .filter_map(|c| ContractStatus::from_id(c.status_id))
        .collect();

    Ok(Json(DataResponse {
        data: InternOverview {
            intern,
            cycle_completed: is_completed_cycle(&statuses),
            contracts,
            vacations,
            vacation_balance,
        },
    }))
}

async fn set_status(
    state: &AppState,
    id: DbId,
    status: InternStatus,
) -> AppResult<Json<DataResponse<Intern>>> {
    let intern = InternRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::not_found("Intern", id))?;
    tracing::info!(intern_id = id, status = ?status, "Intern status changed");
    Ok(Json(DataResponse { data: intern }))
}
