//! Intern field validation.

use crate::error::CoreError;

/// Morning shift.
pub const SHIFT_MORNING: &str = "morning";
/// Afternoon shift.
pub const SHIFT_AFTERNOON: &str = "afternoon";
/// Full-day shift.
pub const SHIFT_FULL_TIME: &str = "full_time";

/// Valid shift values (mirrors `ck_interns_shift`).
pub const VALID_SHIFTS: &[&str] = &[SHIFT_MORNING, SHIFT_AFTERNOON, SHIFT_FULL_TIME];

/// Maximum length of an intern's name (mirrors the column width).
pub const MAX_NAME_LEN: usize = 150;

/// Validate that `name` is non-blank and fits the column.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Intern name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Intern name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional shift value.
pub fn validate_shift(shift: Option<&str>) -> Result<(), CoreError> {
    match shift {
        None => Ok(()),
        Some(s) if VALID_SHIFTS.contains(&s) => Ok(()),
        Some(other) => Err(CoreError::Validation(format!(
            "Invalid shift '{other}'. Must be one of: {VALID_SHIFTS:?}"
        ))),
    }
}
