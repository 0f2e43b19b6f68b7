use axum::routing::get;
use axum::Router;

use crate::handlers::vacations;
use crate::state::AppState;

/// Routes mounted at `/vacations`.
///
/// ```text
/// GET  /      -> list_all
/// GET  /{id}  -> get_by_id
/// PUT  /{id}  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vacations::list_all))
        .route("/{id}", get(vacations::get_by_id).put(vacations::update))
}
