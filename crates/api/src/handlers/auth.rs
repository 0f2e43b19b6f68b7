//! Handlers for the `/auth` resource (login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use internhub_core::error::CoreError;
use internhub_core::types::DbId;
use internhub_db::models::admin::{Admin, AdminResponse};
use internhub_db::models::session::CreateSession;
use internhub_db::repositories::{AdminRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Same message for unknown email and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let admin = AdminRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(admin_id = admin.id, "Rejected login attempt");
        return Err(invalid_credentials());
    }

    let response = create_auth_response(&state, admin).await?;
    tracing::info!(admin_id = response.admin.id, "Admin logged in");
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a refresh token for a new token pair. The old session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let admin = AdminRepo::find_by_id(&state.pool, session.admin_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Admin no longer exists".into())))?;

    Ok(Json(create_auth_response(&state, admin).await?))
}

/// POST /api/v1/auth/logout
///
/// Revoke every session of the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_admin(&state.pool, auth.admin_id).await?;
    tracing::info!(admin_id = auth.admin_id, revoked, "Admin logged out");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

/// Issue a token pair, persist the refresh session, and build the response.
async fn create_auth_response(state: &AppState, admin: Admin) -> AppResult<AuthResponse> {
    let admin_id: DbId = admin.id;
    let access_token = generate_access_token(admin_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            admin_id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        admin: admin.into(),
    })
}
