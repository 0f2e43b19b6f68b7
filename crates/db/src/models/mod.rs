//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin;
pub mod commitment_term;
pub mod contract;
pub mod dashboard;
pub mod intern;
pub mod session;
pub mod vacation;
