pub mod admins;
pub mod auth;
pub mod commitment_terms;
pub mod contracts;
pub mod dashboard;
pub mod interns;
pub mod vacation_calculation;
pub mod vacations;

use internhub_core::types::Date;

/// The current calendar date, read once per request and passed down to the
/// calculator and dashboard queries.
pub(crate) fn today() -> Date {
    chrono::Utc::now().date_naive()
}
