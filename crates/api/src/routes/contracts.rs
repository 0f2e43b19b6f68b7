//! Route definitions for contracts and their commitment terms.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use internhub_core::commitment_term::MAX_TERM_SIZE_BYTES;

use crate::handlers::{commitment_terms, contracts};
use crate::state::AppState;

/// Room for multipart boundaries and headers around the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/contracts`.
///
/// ```text
/// GET  /                                    -> list_all
/// GET  /{id}                                -> get_by_id
/// PUT  /{id}                                -> update
/// GET  /{id}/commitment-term       -> commitment_terms::get_metadata
/// POST /{id}/commitment-term       -> commitment_terms::upload
/// GET  /{id}/commitment-term/file  -> commitment_terms::download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contracts::list_all))
        .route("/{id}", get(contracts::get_by_id).put(contracts::update))
        .route(
            "/{id}/commitment-term",
            get(commitment_terms::get_metadata)
                .post(commitment_terms::upload)
                .layer(DefaultBodyLimit::max(
                    MAX_TERM_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
                )),
        )
        .route(
            "/{id}/commitment-term/file",
            get(commitment_terms::download),
        )
}
