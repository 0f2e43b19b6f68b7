//! Intern entity model and DTOs.

use internhub_core::status::StatusId;
use internhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An intern row from the `interns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Intern {
    pub id: DbId,
    pub name: String,
    pub course: Option<String>,
    pub semester: Option<String>,
    pub department: Option<String>,
    pub supervisor: Option<String>,
    pub shift: Option<String>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new intern. New interns are always Active.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIntern {
    pub name: String,
    pub course: Option<String>,
    pub semester: Option<String>,
    pub department: Option<String>,
    pub supervisor: Option<String>,
    pub shift: Option<String>,
}

/// DTO for updating an existing intern. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIntern {
    pub name: Option<String>,
    pub course: Option<String>,
    pub semester: Option<String>,
    pub department: Option<String>,
    pub supervisor: Option<String>,
    pub shift: Option<String>,
}

/// Query parameters for `GET /interns`.
#[derive(Debug, Default, Deserialize)]
pub struct InternListParams {
    /// Case-insensitive partial match on the intern's name.
    pub search: Option<String>,
}
