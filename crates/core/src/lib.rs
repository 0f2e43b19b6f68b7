//! Pure domain logic for the internship tracker.
//!
//! Nothing in this crate performs I/O: the database layer and the HTTP layer
//! feed it plain values (dates, statuses, file bytes) and persist whatever it
//! returns.

pub mod commitment_term;
pub mod dashboard;
pub mod error;
pub mod intern;
pub mod period;
pub mod status;
pub mod types;
pub mod vacation;
