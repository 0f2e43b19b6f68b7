//! Handlers for contracts, nested under `/interns/{id}/contracts` and
//! top-level at `/contracts`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use internhub_core::error::CoreError;
use internhub_core::period::validate_period;
use internhub_core::status::{ContractStatus, ContractType, StatusId};
use internhub_core::types::DbId;
use internhub_db::models::contract::{
    Contract, ContractWithIntern, CreateContract, UpdateContract,
};
use internhub_db::repositories::ContractRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::interns::ensure_intern;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/interns/{intern_id}/contracts
///
/// Overrides `input.intern_id` with the path value. A contract that names a
/// previous contract defaults to the Renewal type.
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(intern_id): Path<DbId>,
    Json(mut input): Json<CreateContract>,
) -> AppResult<(StatusCode, Json<DataResponse<Contract>>)> {
    ensure_intern(&state.pool, intern_id).await?;
    input.intern_id = intern_id;

    validate_period(input.start_date, input.end_date)?;
    validate_status(input.status_id)?;
    validate_type(input.contract_type_id)?;
    if input.previous_contract_id.is_some() && input.contract_type_id.is_none() {
        input.contract_type_id = Some(ContractType::Renewal.id());
    }

    let contract = ContractRepo::create(&state.pool, &input).await?;
    tracing::info!(contract_id = contract.id, intern_id, "Contract created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: contract })))
}

/// GET /api/v1/interns/{intern_id}/contracts
pub async fn list_by_intern(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(intern_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Contract>>>> {
    ensure_intern(&state.pool, intern_id).await?;
    let contracts = ContractRepo::list_by_intern(&state.pool, intern_id).await?;
    Ok(Json(DataResponse { data: contracts }))
}

/// GET /api/v1/contracts
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<ContractWithIntern>>>> {
    let contracts = ContractRepo::list_with_interns(&state.pool).await?;
    Ok(Json(DataResponse { data: contracts }))
}

/// GET /api/v1/contracts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Contract>>> {
    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Contract", id))?;
    Ok(Json(DataResponse { data: contract }))
}

/// PUT /api/v1/contracts/{id}
///
/// The merged period (stored values overlaid with the input) must stay valid.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContract>,
) -> AppResult<Json<DataResponse<Contract>>> {
    let current = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Contract", id))?;

    validate_period(
        input.start_date.unwrap_or(current.start_date),
        input.end_date.unwrap_or(current.end_date),
    )?;
    validate_status(input.status_id)?;
    validate_type(input.contract_type_id)?;

    let contract = ContractRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Contract", id))?;
    tracing::info!(contract_id = id, "Contract updated");
    Ok(Json(DataResponse { data: contract }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_status(status_id: Option<StatusId>) -> Result<(), CoreError> {
    match status_id {
        Some(id) if ContractStatus::from_id(id).is_none() => Err(CoreError::Validation(
            format!("Unknown contract status id {id}"),
        )),
        _ => Ok(()),
    }
}

fn validate_type(type_id: Option<StatusId>) -> Result<(), CoreError> {
    match type_id {
        Some(id) if ContractType::from_id(id).is_none() => Err(CoreError::Validation(
            format!("Unknown contract type id {id}"),
        )),
        _ => Ok(()),
    }
}
