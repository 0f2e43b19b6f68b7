//! Row types returned by the dashboard queries.

use internhub_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// Headline counters.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    /// Distinct interns holding at least one contract that is not closed.
    pub active_interns: i64,
    pub total_contracts: i64,
}

/// A contract ending inside the selected window.
#[derive(Debug, Clone, Serialize)]
pub struct ExpiringContract {
    pub contract_id: DbId,
    pub intern_id: DbId,
    pub intern_name: String,
    pub end_date: Date,
    pub days_remaining: i64,
}

/// An intern whose vacation period contains today.
#[derive(Debug, Clone, Serialize)]
pub struct InternOnVacation {
    pub vacation_id: DbId,
    pub intern_id: DbId,
    pub intern_name: String,
    pub return_date: Date,
    pub days_until_return: i64,
}

/// An intern who has used up every permitted contract.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompletedCycleIntern {
    pub intern_id: DbId,
    pub intern_name: String,
    pub contract_count: i64,
}
