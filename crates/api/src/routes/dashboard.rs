//! Route definitions for the dashboard views.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /summary              -> summary
/// GET /expiring-contracts   -> expiring_contracts
/// GET /on-vacation          -> on_vacation
/// GET /completed-cycles     -> completed_cycles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::summary))
        .route("/expiring-contracts", get(dashboard::expiring_contracts))
        .route("/on-vacation", get(dashboard::on_vacation))
        .route("/completed-cycles", get(dashboard::completed_cycles))
}
