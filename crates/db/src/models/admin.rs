//! Administrator account model and DTOs.

use internhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            created_at: admin.created_at,
        }
    }
}

/// DTO for creating a new admin. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
