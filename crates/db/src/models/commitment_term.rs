//! Commitment-term document metadata.

use internhub_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `commitment_terms` table.
///
/// `file_path` is internal and never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitmentTerm {
    pub id: DbId,
    pub contract_id: DbId,
    pub original_filename: String,
    #[serde(skip_serializing)]
    pub file_path: String,
    pub mime_type: String,
    pub file_size_bytes: i64,
    pub uploaded_on: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Metadata written on first upload and on replacement.
#[derive(Debug, Clone)]
pub struct SaveCommitmentTerm {
    pub contract_id: DbId,
    pub original_filename: String,
    pub file_path: String,
    pub mime_type: String,
    pub file_size_bytes: i64,
}
