//! Proportional vacation calculation for one intern.

use std::collections::BTreeSet;

use axum::extract::{Path, State};
use axum::Json;
use internhub_core::error::CoreError;
use internhub_core::types::{Date, DbId};
use internhub_core::vacation::{
    calculate_entitlement, suggest_vacation_window, CalculationMode, ContractPeriod, Entitlement,
    VacationPrefill,
};
use internhub_db::repositories::ContractRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::interns::ensure_intern;
use crate::handlers::today;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /interns/{id}/vacation-calculation`.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    /// Contracts of this intern to include. Duplicates are ignored.
    pub contract_ids: Vec<DbId>,
    pub mode: CalculationMode,
    /// End of the period for [`CalculationMode::ManualDate`].
    pub reference_date: Option<Date>,
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub calculation: Entitlement,
    /// Ready-made body for `POST /interns/{id}/vacations`; absent when
    /// nothing is owed.
    pub prefill: Option<VacationPrefill>,
}

/// POST /api/v1/interns/{intern_id}/vacation-calculation
///
/// Nothing is persisted. Contract ids that do not belong to the intern are
/// reported as 404.
pub async fn calculate(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(intern_id): Path<DbId>,
    Json(input): Json<CalculationRequest>,
) -> AppResult<Json<DataResponse<CalculationResponse>>> {
    ensure_intern(&state.pool, intern_id).await?;

    let requested: BTreeSet<DbId> = input.contract_ids.iter().copied().collect();
    if requested.is_empty() {
        return Err(CoreError::Validation(
            "Select at least one contract for the calculation".into(),
        )
        .into());
    }
    let ids: Vec<DbId> = requested.iter().copied().collect();

    let contracts = ContractRepo::find_many_for_intern(&state.pool, intern_id, &ids).await?;
    if let Some(missing) = requested
        .iter()
        .find(|id| !contracts.iter().any(|c| c.id == **id))
    {
        return Err(AppError::not_found("Contract", *missing));
    }

    let periods: Vec<ContractPeriod> = contracts.iter().map(|c| c.period()).collect();
    let calculation = calculate_entitlement(&periods, input.mode, input.reference_date, today())?;
    let prefill = suggest_vacation_window(intern_id, &calculation);

    tracing::debug!(
        intern_id,
        mode = ?input.mode,
        total_days = calculation.total_days,
        entitlement_days = calculation.entitlement_days,
        "Vacation entitlement calculated"
    );

    Ok(Json(DataResponse {
        data: CalculationResponse {
            calculation,
            prefill,
        },
    }))
}
