//! Proportional vacation entitlement.
//!
//! An intern earns [`ENTITLEMENT_DAYS_PER_MONTH`] vacation days for every
//! equivalent month worked, where an equivalent month is a flat
//! [`DAYS_PER_EQUIVALENT_MONTH`] calendar days. The period starts at the
//! earliest start date among the selected contracts and ends at a date chosen
//! by the [`CalculationMode`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::period::{inclusive_days, validate_period};
use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Calendar days making up one equivalent month.
pub const DAYS_PER_EQUIVALENT_MONTH: i64 = 30;

/// Vacation days earned per equivalent month.
pub const ENTITLEMENT_DAYS_PER_MONTH: f64 = 2.5;

/// Worked days per earned vacation day (`30 / 2.5`).
const DAYS_PER_ENTITLEMENT_DAY: i64 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How the end of the calculation period is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Time already worked: the period ends today.
    AccruedToDate,
    /// Projection: the period ends at the latest end date of the selection.
    ProjectToContractEnd,
    /// The caller supplies the end date.
    ManualDate,
}

/// The start/end dates of one selected contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractPeriod {
    pub start_date: Date,
    pub end_date: Date,
}

/// Result of an entitlement calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entitlement {
    pub period_start: Date,
    pub period_end: Date,
    /// Calendar days in the period, both ends included.
    pub total_days: i64,
    /// `total_days / 30` as a real number.
    pub equivalent_months: f64,
    /// Whole vacation days owed.
    pub entitlement_days: i64,
}

/// Suggested vacation window derived from an [`Entitlement`].
///
/// Returned to the caller alongside the calculation and accepted as-is by the
/// vacation registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPrefill {
    pub intern_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub days: i64,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Resolve the end of the calculation period for `mode`.
///
/// `reference_date` is required for [`CalculationMode::ManualDate`] and
/// ignored otherwise.
pub fn resolve_period_end(
    contracts: &[ContractPeriod],
    mode: CalculationMode,
    reference_date: Option<Date>,
    today: Date,
) -> Result<Date, CoreError> {
    match mode {
        CalculationMode::AccruedToDate => Ok(today),
        CalculationMode::ProjectToContractEnd => contracts
            .iter()
            .map(|c| c.end_date)
            .max()
            .ok_or_else(no_contracts_selected),
        CalculationMode::ManualDate => reference_date.ok_or_else(|| {
            CoreError::Validation("A reference date is required for manual calculation".into())
        }),
    }
}

/// Compute the proportional vacation entitlement for the selected contracts.
///
/// Fails with [`CoreError::InvalidPeriod`] when the resolved end date falls
/// before the earliest contract start.
pub fn calculate_entitlement(
    contracts: &[ContractPeriod],
    mode: CalculationMode,
    reference_date: Option<Date>,
    today: Date,
) -> Result<Entitlement, CoreError> {
    let period_start = contracts
        .iter()
        .map(|c| c.start_date)
        .min()
        .ok_or_else(no_contracts_selected)?;
    let period_end = resolve_period_end(contracts, mode, reference_date, today)?;
    validate_period(period_start, period_end)?;

    let total_days = inclusive_days(period_start, period_end);

    Ok(Entitlement {
        period_start,
        period_end,
        total_days,
        equivalent_months: total_days as f64 / DAYS_PER_EQUIVALENT_MONTH as f64,
        entitlement_days: entitlement_days(total_days),
    })
}

/// Whole entitlement days for `total_days` worked.
///
/// `total_days / 30 * 2.5` reduces to `total_days / 12`; the division is done
/// on integers and rounded half to even so results never depend on
/// floating-point representation.
pub fn entitlement_days(total_days: i64) -> i64 {
    let quotient = total_days.div_euclid(DAYS_PER_ENTITLEMENT_DAY);
    let twice_remainder = 2 * total_days.rem_euclid(DAYS_PER_ENTITLEMENT_DAY);

    match twice_remainder.cmp(&DAYS_PER_ENTITLEMENT_DAY) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + quotient.rem_euclid(2),
    }
}

/// Suggest the vacation window that starts the day after the period ends.
///
/// Returns `None` when nothing is owed or when the window would fall outside
/// the representable calendar.
pub fn suggest_vacation_window(intern_id: DbId, entitlement: &Entitlement) -> Option<VacationPrefill> {
    let extra_days = u64::try_from(entitlement.entitlement_days.checked_sub(1)?).ok()?;
    let start_date = entitlement.period_end.succ_opt()?;
    let end_date = start_date.checked_add_days(chrono::Days::new(extra_days))?;

    Some(VacationPrefill {
        intern_id,
        start_date,
        end_date,
        days: entitlement.entitlement_days,
    })
}

fn no_contracts_selected() -> CoreError {
    CoreError::Validation("Select at least one contract for the calculation".into())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    fn period(start: Date, end: Date) -> ContractPeriod {
        ContractPeriod {
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn accrued_to_date_half_year() {
        let contracts = [period(d(2024, 1, 1), d(2024, 12, 31))];
        let result = calculate_entitlement(
            &contracts,
            CalculationMode::AccruedToDate,
            None,
            d(2024, 7, 1),
        )
        .unwrap();

        assert_eq!(result.period_start, d(2024, 1, 1));
        assert_eq!(result.period_end, d(2024, 7, 1));
        assert_eq!(result.total_days, 183);
        assert!((result.equivalent_months - 6.1).abs() < 1e-9);
        assert_eq!(result.entitlement_days, 15);
    }

    #[test]
    fn projection_uses_latest_end_and_earliest_start() {
        let contracts = [
            period(d(2024, 7, 1), d(2024, 12, 31)),
            period(d(2024, 1, 1), d(2024, 6, 30)),
        ];
        let result = calculate_entitlement(
            &contracts,
            CalculationMode::ProjectToContractEnd,
            None,
            d(2024, 2, 1),
        )
        .unwrap();

        assert_eq!(result.period_start, d(2024, 1, 1));
        assert_eq!(result.period_end, d(2024, 12, 31));
        assert_eq!(result.total_days, 366);
        assert_eq!(result.entitlement_days, 30); // 30.5 rounds to even
    }

    #[test]
    fn manual_date_before_start_is_invalid_period() {
        let contracts = [period(d(2024, 5, 1), d(2024, 10, 31))];
        let err = calculate_entitlement(
            &contracts,
            CalculationMode::ManualDate,
            Some(d(2024, 4, 30)),
            d(2024, 6, 1),
        )
        .unwrap_err();

        assert_matches!(err, CoreError::InvalidPeriod { .. });
    }

    #[test]
    fn manual_date_requires_reference_date() {
        let contracts = [period(d(2024, 5, 1), d(2024, 10, 31))];
        let err =
            calculate_entitlement(&contracts, CalculationMode::ManualDate, None, d(2024, 6, 1))
                .unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = calculate_entitlement(&[], CalculationMode::AccruedToDate, None, d(2024, 6, 1))
            .unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn calculation_is_deterministic() {
        let contracts = [period(d(2023, 3, 15), d(2024, 3, 14))];
        let first = calculate_entitlement(
            &contracts,
            CalculationMode::ManualDate,
            Some(d(2023, 11, 2)),
            d(2030, 1, 1),
        )
        .unwrap();
        let second = calculate_entitlement(
            &contracts,
            CalculationMode::ManualDate,
            Some(d(2023, 11, 2)),
            d(2031, 1, 1),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn entitlement_rounds_half_to_even() {
        assert_eq!(entitlement_days(1), 0);
        assert_eq!(entitlement_days(6), 0); // 0.5
        assert_eq!(entitlement_days(7), 1);
        assert_eq!(entitlement_days(12), 1);
        assert_eq!(entitlement_days(18), 2); // 1.5
        assert_eq!(entitlement_days(30), 2); // 2.5
        assert_eq!(entitlement_days(183), 15);
    }

    #[test]
    fn suggested_window_follows_period_end() {
        let entitlement = Entitlement {
            period_start: d(2024, 1, 1),
            period_end: d(2024, 7, 1),
            total_days: 183,
            equivalent_months: 6.1,
            entitlement_days: 15,
        };
        let prefill = suggest_vacation_window(7, &entitlement).unwrap();

        assert_eq!(prefill.intern_id, 7);
        assert_eq!(prefill.start_date, d(2024, 7, 2));
        assert_eq!(prefill.end_date, d(2024, 7, 16));
        assert_eq!(prefill.days, 15);
    }

    #[test]
    fn no_window_when_nothing_is_owed() {
        let entitlement = Entitlement {
            period_start: d(2024, 1, 1),
            period_end: d(2024, 1, 3),
            total_days: 3,
            equivalent_months: 0.1,
            entitlement_days: 0,
        };
        assert!(suggest_vacation_window(1, &entitlement).is_none());
    }

    #[test]
    fn far_future_reference_date_yields_no_window() {
        let contracts = [period(d(2024, 1, 1), d(2024, 12, 31))];
        let reference: Date = "+250000-01-01".parse().unwrap();
        let entitlement = calculate_entitlement(
            &contracts,
            CalculationMode::ManualDate,
            Some(reference),
            d(2024, 6, 1),
        )
        .unwrap();

        assert!(entitlement.entitlement_days > 0);
        assert!(suggest_vacation_window(1, &entitlement).is_none());
    }

    #[test]
    fn window_ending_on_last_representable_day_is_kept() {
        let last = Date::MAX;
        let entitlement = Entitlement {
            period_start: d(2024, 1, 1),
            period_end: last - chrono::Days::new(2),
            total_days: 0,
            equivalent_months: 0.0,
            entitlement_days: 2,
        };
        let prefill = suggest_vacation_window(1, &entitlement).unwrap();

        assert_eq!(prefill.start_date, last - chrono::Days::new(1));
        assert_eq!(prefill.end_date, last);
    }
}
