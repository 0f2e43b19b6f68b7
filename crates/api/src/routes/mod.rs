pub mod admins;
pub mod auth;
pub mod contracts;
pub mod dashboard;
pub mod health;
pub mod interns;
pub mod vacations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                   login (public)
/// /auth/refresh                                 refresh (public)
/// /auth/logout                                  logout
///
/// /admins                                       list, create
///
/// /interns                                      list (?search=), create
/// /interns/{id}                                 get, update, delete
/// /interns/{id}/activate                        activate (POST)
/// /interns/{id}/deactivate                      deactivate (POST)
/// /interns/{id}/overview                        intern with contracts and vacations
/// /interns/{id}/contracts                       list, create
/// /interns/{id}/vacations                       list, create
/// /interns/{id}/vacation-balance                days already taken
/// /interns/{id}/vacation-calculation            entitlement + prefill (POST)
///
/// /contracts                                    list all
/// /contracts/{id}                               get, update
/// /contracts/{id}/commitment-term               metadata (GET), upload (POST)
/// /contracts/{id}/commitment-term/file          download
///
/// /vacations                                    list all
/// /vacations/{id}                               get, update
///
/// /dashboard/summary                            counters
/// /dashboard/expiring-contracts                 ?days=7|30|60
/// /dashboard/on-vacation                        vacations covering today
/// /dashboard/completed-cycles                   interns with a finished cycle
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admins", admins::router())
        .nest("/interns", interns::router())
        .nest("/contracts", contracts::router())
        .nest("/vacations", vacations::router())
        .nest("/dashboard", dashboard::router())
}
