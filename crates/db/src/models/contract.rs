//! Contract entity model and DTOs.

use internhub_core::status::StatusId;
use internhub_core::types::{Date, DbId, Timestamp};
use internhub_core::vacation::ContractPeriod;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contract row from the `contracts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contract {
    pub id: DbId,
    pub intern_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub status_id: StatusId,
    pub contract_type_id: StatusId,
    /// Who this intern is replacing, if anyone.
    pub substitution_note: Option<String>,
    pub notes: Option<String>,
    /// The contract this one renews.
    pub previous_contract_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Contract {
    pub fn period(&self) -> ContractPeriod {
        ContractPeriod {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// A contract joined with its intern's name, for cross-intern listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContractWithIntern {
    pub id: DbId,
    pub intern_id: DbId,
    pub intern_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status_id: StatusId,
    pub contract_type_id: StatusId,
}

/// DTO for creating a new contract.
///
/// `intern_id` is taken from the URL path by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContract {
    #[serde(default)]
    pub intern_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    /// Defaults to 1 (Active) if omitted.
    pub status_id: Option<StatusId>,
    /// Defaults to 1 (Initial) if omitted.
    pub contract_type_id: Option<StatusId>,
    pub substitution_note: Option<String>,
    pub notes: Option<String>,
    pub previous_contract_id: Option<DbId>,
}

/// DTO for updating an existing contract. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContract {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: Option<StatusId>,
    pub contract_type_id: Option<StatusId>,
    pub substitution_note: Option<String>,
    pub notes: Option<String>,
}
