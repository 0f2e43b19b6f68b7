//! Handlers for vacations, nested under `/interns/{id}/vacations` and
//! top-level at `/vacations`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use internhub_core::error::CoreError;
use internhub_core::period::{inclusive_days, validate_period};
use internhub_core::types::DbId;
use internhub_db::models::vacation::{
    CreateVacation, UpdateVacation, Vacation, VacationBalance, VacationWithIntern,
};
use internhub_db::repositories::VacationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::interns::ensure_intern;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/interns/{intern_id}/vacations
///
/// Accepts either a hand-filled form or the `prefill` object returned by the
/// vacation calculation. `days_used` defaults to the period length.
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(intern_id): Path<DbId>,
    Json(mut input): Json<CreateVacation>,
) -> AppResult<(StatusCode, Json<DataResponse<Vacation>>)> {
    ensure_intern(&state.pool, intern_id).await?;
    input.intern_id = intern_id;

    validate_period(input.start_date, input.end_date)?;
    let days_used = match input.days_used {
        Some(days) => days,
        None => i32::try_from(inclusive_days(input.start_date, input.end_date))
            .map_err(|_| CoreError::Validation("Vacation period is too long".into()))?,
    };
    validate_days_used(days_used)?;

    let vacation = VacationRepo::create(&state.pool, &input, days_used).await?;
    tracing::info!(vacation_id = vacation.id, intern_id, days_used, "Vacation registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: vacation })))
}

/// GET /api/v1/interns/{intern_id}/vacations
pub async fn list_by_intern(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(intern_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Vacation>>>> {
    ensure_intern(&state.pool, intern_id).await?;
    let vacations = VacationRepo::list_by_intern(&state.pool, intern_id).await?;
    Ok(Json(DataResponse { data: vacations }))
}

/// GET /api/v1/vacations
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<VacationWithIntern>>>> {
    let vacations = VacationRepo::list_with_interns(&state.pool).await?;
    Ok(Json(DataResponse { data: vacations }))
}

/// GET /api/v1/vacations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vacation>>> {
    let vacation = VacationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Vacation", id))?;
    Ok(Json(DataResponse { data: vacation }))
}

/// PUT /api/v1/vacations/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVacation>,
) -> AppResult<Json<DataResponse<Vacation>>> {
    let current = VacationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Vacation", id))?;

    validate_period(
        input.start_date.unwrap_or(current.start_date),
        input.end_date.unwrap_or(current.end_date),
    )?;
    if let Some(days) = input.days_used {
        validate_days_used(days)?;
    }

    let vacation = VacationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Vacation", id))?;
    tracing::info!(vacation_id = id, "Vacation updated");
    Ok(Json(DataResponse { data: vacation }))
}

/// GET /api/v1/interns/{intern_id}/vacation-balance
pub async fn balance(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(intern_id): Path<DbId>,
) -> AppResult<Json<DataResponse<VacationBalance>>> {
    ensure_intern(&state.pool, intern_id).await?;
    let balance = VacationRepo::balance_for_intern(&state.pool, intern_id).await?;
    Ok(Json(DataResponse { data: balance }))
}

fn validate_days_used(days: i32) -> Result<(), CoreError> {
    if days <= 0 {
        return Err(CoreError::Validation(
            "Days used must be a positive number".into(),
        ));
    }
    Ok(())
}
