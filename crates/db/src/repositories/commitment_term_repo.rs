//! Repository for the `commitment_terms` table.

use internhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::commitment_term::{CommitmentTerm, SaveCommitmentTerm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, contract_id, original_filename, file_path, mime_type, \
                       file_size_bytes, uploaded_on, created_at, updated_at";

/// Provides storage of commitment-term metadata (one row per contract).
pub struct CommitmentTermRepo;

impl CommitmentTermRepo {
    /// Insert the first term for a contract.
    ///
    /// Fails with a unique violation on `uq_commitment_terms_contract_id` if
    /// the contract already has a term.
    pub async fn create(
        pool: &PgPool,
        input: &SaveCommitmentTerm,
    ) -> Result<CommitmentTerm, sqlx::Error> {
        let query = format!(
            "INSERT INTO commitment_terms
                 (contract_id, original_filename, file_path, mime_type, file_size_bytes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommitmentTerm>(&query)
            .bind(input.contract_id)
            .bind(&input.original_filename)
            .bind(&input.file_path)
            .bind(&input.mime_type)
            .bind(input.file_size_bytes)
            .fetch_one(pool)
            .await
    }

    /// Insert or overwrite the contract's term in place.
    ///
    /// Uses `ON CONFLICT (contract_id) DO UPDATE` so the contract keeps exactly
    /// one row; the upload date is reset to today.
    pub async fn replace(
        pool: &PgPool,
        input: &SaveCommitmentTerm,
    ) -> Result<CommitmentTerm, sqlx::Error> {
        let query = format!(
            "INSERT INTO commitment_terms
                 (contract_id, original_filename, file_path, mime_type, file_size_bytes)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (contract_id) DO UPDATE
             SET original_filename = EXCLUDED.original_filename,
                 file_path = EXCLUDED.file_path,
                 mime_type = EXCLUDED.mime_type,
                 file_size_bytes = EXCLUDED.file_size_bytes,
                 uploaded_on = CURRENT_DATE
             RETURNING {COLUMNS}"
        );
        let term = sqlx::query_as::<_, CommitmentTerm>(&query)
            .bind(input.contract_id)
            .bind(&input.original_filename)
            .bind(&input.file_path)
            .bind(&input.mime_type)
            .bind(input.file_size_bytes)
            .fetch_one(pool)
            .await?;
        tracing::debug!(contract_id = input.contract_id, term_id = term.id, "Commitment term saved");
        Ok(term)
    }

    /// Find the term attached to a contract.
    pub async fn find_by_contract(
        pool: &PgPool,
        contract_id: DbId,
    ) -> Result<Option<CommitmentTerm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM commitment_terms WHERE contract_id = $1");
        sqlx::query_as::<_, CommitmentTerm>(&query)
            .bind(contract_id)
            .fetch_optional(pool)
            .await
    }

    /// Stored file paths of every term belonging to an intern's contracts.
    pub async fn file_paths_for_intern(
        pool: &PgPool,
        intern_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT t.file_path
             FROM commitment_terms t
             JOIN contracts c ON c.id = t.contract_id
             WHERE c.intern_id = $1
             ORDER BY t.contract_id",
        )
        .bind(intern_id)
        .fetch_all(pool)
        .await
    }
}
