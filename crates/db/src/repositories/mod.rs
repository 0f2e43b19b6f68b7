//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod commitment_term_repo;
pub mod contract_repo;
pub mod dashboard_repo;
pub mod intern_repo;
pub mod session_repo;
pub mod vacation_repo;

pub use admin_repo::AdminRepo;
pub use commitment_term_repo::CommitmentTermRepo;
pub use contract_repo::ContractRepo;
pub use dashboard_repo::DashboardRepo;
pub use intern_repo::InternRepo;
pub use session_repo::SessionRepo;
pub use vacation_repo::VacationRepo;
