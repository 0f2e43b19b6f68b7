//! Repository for the `vacations` table.

use internhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::vacation::{
    CreateVacation, UpdateVacation, Vacation, VacationBalance, VacationWithIntern,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, intern_id, start_date, end_date, days_used, memo, created_at, updated_at";

/// Provides CRUD operations for vacations.
pub struct VacationRepo;

impl VacationRepo {
    /// Insert a vacation. `days_used` must already be resolved by the caller.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVacation,
        days_used: i32,
    ) -> Result<Vacation, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacations (intern_id, start_date, end_date, days_used, memo)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(input.intern_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(days_used)
            .bind(&input.memo)
            .fetch_one(pool)
            .await
    }

    /// Find a vacation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vacation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vacations WHERE id = $1");
        sqlx::query_as::<_, Vacation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the vacations of one intern, most recent first.
    pub async fn list_by_intern(
        pool: &PgPool,
        intern_id: DbId,
    ) -> Result<Vec<Vacation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacations WHERE intern_id = $1 ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(intern_id)
            .fetch_all(pool)
            .await
    }

    /// List every vacation with its intern's name, most recent first.
    pub async fn list_with_interns(pool: &PgPool) -> Result<Vec<VacationWithIntern>, sqlx::Error> {
        sqlx::query_as::<_, VacationWithIntern>(
            "SELECT v.id, v.intern_id, i.name AS intern_name, v.start_date, v.end_date,
                    v.days_used, v.memo
             FROM vacations v
             JOIN interns i ON i.id = v.intern_id
             ORDER BY v.start_date DESC, v.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a vacation. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVacation,
    ) -> Result<Option<Vacation>, sqlx::Error> {
        let query = format!(
            "UPDATE vacations SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                days_used = COALESCE($4, days_used),
                memo = COALESCE($5, memo)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.days_used)
            .bind(&input.memo)
            .fetch_optional(pool)
            .await
    }

    /// Count and sum the vacation days already taken by an intern.
    pub async fn balance_for_intern(
        pool: &PgPool,
        intern_id: DbId,
    ) -> Result<VacationBalance, sqlx::Error> {
        sqlx::query_as::<_, VacationBalance>(
            "SELECT $1::BIGINT AS intern_id,
                    COUNT(*) AS vacation_count,
                    COALESCE(SUM(days_used), 0)::BIGINT AS days_used_total
             FROM vacations
             WHERE intern_id = $1",
        )
        .bind(intern_id)
        .fetch_one(pool)
        .await
    }
}
