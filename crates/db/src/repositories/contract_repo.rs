//! Repository for the `contracts` table.

use internhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::contract::{Contract, ContractWithIntern, CreateContract, UpdateContract};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, intern_id, start_date, end_date, status_id, contract_type_id, \
                       substitution_note, notes, previous_contract_id, created_at, updated_at";

/// Provides CRUD operations for contracts.
pub struct ContractRepo;

impl ContractRepo {
    /// Insert a new contract, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Active); if
    /// `contract_type_id` is `None`, defaults to 1 (Initial).
    pub async fn create(pool: &PgPool, input: &CreateContract) -> Result<Contract, sqlx::Error> {
        let query = format!(
            "INSERT INTO contracts (intern_id, start_date, end_date, status_id, contract_type_id,
                                    substitution_note, notes, previous_contract_id)
             VALUES ($1, $2, $3, COALESCE($4, 1), COALESCE($5, 1), $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(input.intern_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status_id)
            .bind(input.contract_type_id)
            .bind(&input.substitution_note)
            .bind(&input.notes)
            .bind(input.previous_contract_id)
            .fetch_one(pool)
            .await
    }

    /// Find a contract by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contracts of one intern, oldest first.
    pub async fn list_by_intern(
        pool: &PgPool,
        intern_id: DbId,
    ) -> Result<Vec<Contract>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contracts WHERE intern_id = $1 ORDER BY start_date, id"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(intern_id)
            .fetch_all(pool)
            .await
    }

    /// List every contract with its intern's name.
    pub async fn list_with_interns(pool: &PgPool) -> Result<Vec<ContractWithIntern>, sqlx::Error> {
        sqlx::query_as::<_, ContractWithIntern>(
            "SELECT c.id, c.intern_id, i.name AS intern_name, c.start_date, c.end_date,
                    c.status_id, c.contract_type_id
             FROM contracts c
             JOIN interns i ON i.id = c.intern_id
             ORDER BY i.name, c.start_date, c.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Fetch the contracts among `ids` that belong to `intern_id`.
    ///
    /// Ids belonging to other interns (or not existing) are silently absent
    /// from the result; callers compare lengths to detect them.
    pub async fn find_many_for_intern(
        pool: &PgPool,
        intern_id: DbId,
        ids: &[DbId],
    ) -> Result<Vec<Contract>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contracts
             WHERE intern_id = $1 AND id = ANY($2)
             ORDER BY start_date, id"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(intern_id)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Update a contract. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContract,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "UPDATE contracts SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                status_id = COALESCE($4, status_id),
                contract_type_id = COALESCE($5, contract_type_id),
                substitution_note = COALESCE($6, substitution_note),
                notes = COALESCE($7, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status_id)
            .bind(input.contract_type_id)
            .bind(&input.substitution_note)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }
}
