//! Vacation entity model and DTOs.

use internhub_core::types::{Date, DbId, Timestamp};
use internhub_core::vacation::VacationPrefill;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vacation row from the `vacations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vacation {
    pub id: DbId,
    pub intern_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub days_used: i32,
    pub memo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A vacation joined with its intern's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VacationWithIntern {
    pub id: DbId,
    pub intern_id: DbId,
    pub intern_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub days_used: i32,
    pub memo: Option<String>,
}

/// DTO for registering a vacation.
///
/// `intern_id` is taken from the URL path by the handler. When `days_used`
/// is omitted it defaults to the inclusive length of the period. A
/// [`VacationPrefill`] body is accepted as-is (`days` maps to `days_used`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVacation {
    #[serde(default)]
    pub intern_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(alias = "days")]
    pub days_used: Option<i32>,
    pub memo: Option<String>,
}

impl From<VacationPrefill> for CreateVacation {
    fn from(prefill: VacationPrefill) -> Self {
        Self {
            intern_id: prefill.intern_id,
            start_date: prefill.start_date,
            end_date: prefill.end_date,
            days_used: i32::try_from(prefill.days).ok(),
            memo: None,
        }
    }
}

/// DTO for updating a vacation. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVacation {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub days_used: Option<i32>,
    pub memo: Option<String>,
}

/// Days of vacation already taken by one intern.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VacationBalance {
    pub intern_id: DbId,
    pub vacation_count: i64,
    pub days_used_total: i64,
}
