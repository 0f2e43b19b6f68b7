use std::sync::Arc;

use crate::config::ServerConfig;
use crate::documents::TermStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: internhub_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// On-disk storage for commitment-term files.
    pub terms: TermStorage,
}

impl AppState {
    pub fn new(pool: internhub_db::DbPool, config: ServerConfig) -> Self {
        let terms = TermStorage::new(config.upload_dir.clone());
        Self {
            pool,
            config: Arc::new(config),
            terms,
        }
    }
}
