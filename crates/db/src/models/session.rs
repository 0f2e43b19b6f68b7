//! Admin session model and DTOs.

use internhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub admin_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub admin_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
