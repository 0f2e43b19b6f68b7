//! Handlers for the `/admins` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use internhub_core::error::CoreError;
use internhub_db::models::admin::{AdminResponse, CreateAdmin};
use internhub_db::repositories::AdminRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /admins`.
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// GET /api/v1/admins
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<AdminResponse>>>> {
    let admins = AdminRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: admins.into_iter().map(AdminResponse::from).collect(),
    }))
}

/// POST /api/v1/admins
///
/// Duplicate emails fail with 409 via `uq_admins_email`.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateAdminRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AdminResponse>>)> {
    let name = input.name.trim();
    let email = input.email.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()).into());
    }
    if !is_plausible_email(email) {
        return Err(CoreError::Validation(format!("Invalid email address '{email}'")).into());
    }
    validate_password_strength(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, created_by = auth.admin_id, "Admin created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: admin.into() })))
}

/// One `@` with something on both sides and a dot in the domain.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
