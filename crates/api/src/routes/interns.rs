//! Route definitions for interns and their nested resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contracts, interns, vacation_calculation, vacations};
use crate::state::AppState;

/// Routes mounted at `/interns`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// GET    /{id}                           -> get_by_id
/// PUT    /{id}                           -> update
/// DELETE /{id}                           -> delete
/// POST   /{id}/activate                  -> activate
/// POST   /{id}/deactivate                -> deactivate
/// GET    /{id}/overview                  -> overview
///
/// GET    /{id}/contracts          -> contracts::list_by_intern
/// POST   /{id}/contracts          -> contracts::create
/// GET    /{id}/vacations          -> vacations::list_by_intern
/// POST   /{id}/vacations          -> vacations::create
/// GET    /{id}/vacation-balance   -> vacations::balance
/// POST   /{id}/vacation-calculation -> vacation_calculation::calculate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(interns::list).post(interns::create))
        .route(
            "/{id}",
            get(interns::get_by_id)
                .put(interns::update)
                .delete(interns::delete),
        )
        .route("/{id}/activate", post(interns::activate))
        .route("/{id}/deactivate", post(interns::deactivate))
        .route("/{id}/overview", get(interns::overview))
        .route(
            "/{id}/contracts",
            get(contracts::list_by_intern).post(contracts::create),
        )
        .route(
            "/{id}/vacations",
            get(vacations::list_by_intern).post(vacations::create),
        )
        .route("/{id}/vacation-balance", get(vacations::balance))
        .route(
            "/{id}/vacation-calculation",
            post(vacation_calculation::calculate),
        )
}
