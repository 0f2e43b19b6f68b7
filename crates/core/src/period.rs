//! Date-period helpers shared by contracts, vacations and the calculator.

use crate::error::CoreError;
use crate::types::Date;

/// Reject a period whose end precedes its start.
///
/// A single-day period (`start == end`) is valid.
pub fn validate_period(start: Date, end: Date) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::InvalidPeriod { start, end });
    }
    Ok(())
}

/// Number of calendar days in `[start, end]`, counting both ends.
///
/// Callers are expected to have validated the period first; an inverted
/// period yields zero or a negative count.
pub fn inclusive_days(start: Date, end: Date) -> i64 {
    (end - start).num_days() + 1
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn same_day_period_is_valid_and_counts_one_day() {
        assert!(validate_period(d(2024, 3, 1), d(2024, 3, 1)).is_ok());
        assert_eq!(inclusive_days(d(2024, 3, 1), d(2024, 3, 1)), 1);
    }

    #[test]
    fn inverted_period_is_rejected() {
        let err = validate_period(d(2024, 3, 2), d(2024, 3, 1)).unwrap_err();
        assert_matches!(err, CoreError::InvalidPeriod { start, end } => {
            assert_eq!(start, d(2024, 3, 2));
            assert_eq!(end, d(2024, 3, 1));
        });
    }

    #[test]
    fn inclusive_days_spans_leap_day() {
        assert_eq!(inclusive_days(d(2024, 2, 28), d(2024, 3, 1)), 3);
    }
}
