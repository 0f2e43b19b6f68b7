//! Repository for the `interns` table.

use internhub_core::status::{InternStatus, StatusId};
use internhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::intern::{CreateIntern, Intern, UpdateIntern};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, course, semester, department, supervisor, shift, \
                       status_id, created_at, updated_at";

/// Provides CRUD operations for interns.
pub struct InternRepo;

impl InternRepo {
    /// Insert a new intern with status Active, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIntern) -> Result<Intern, sqlx::Error> {
        let query = format!(
            "INSERT INTO interns (name, course, semester, department, supervisor, shift, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intern>(&query)
            .bind(input.name.trim())
            .bind(&input.course)
            .bind(&input.semester)
            .bind(&input.department)
            .bind(&input.supervisor)
            .bind(&input.shift)
            .bind(InternStatus::Active.id())
            .fetch_one(pool)
            .await
    }

    /// Find an intern by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Intern>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interns WHERE id = $1");
        sqlx::query_as::<_, Intern>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List interns ordered by name.
    ///
    /// When `search` is given, only names containing it (case-insensitive)
    /// are returned.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Intern>, sqlx::Error> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));
        let query = format!(
            "SELECT {COLUMNS} FROM interns
             WHERE ($1::TEXT IS NULL OR name ILIKE $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Intern>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update an intern. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIntern,
    ) -> Result<Option<Intern>, sqlx::Error> {
        let query = format!(
            "UPDATE interns SET
                name = COALESCE($2, name),
                course = COALESCE($3, course),
                semester = COALESCE($4, semester),
                department = COALESCE($5, department),
                supervisor = COALESCE($6, supervisor),
                shift = COALESCE($7, shift)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intern>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.course)
            .bind(&input.semester)
            .bind(&input.department)
            .bind(&input.supervisor)
            .bind(&input.shift)
            .fetch_optional(pool)
            .await
    }

    /// Set the lifecycle status of an intern.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: InternStatus,
    ) -> Result<Option<Intern>, sqlx::Error> {
        let query = format!(
            "UPDATE interns SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intern>(&query)
            .bind(id)
            .bind(StatusId::from(status))
            .fetch_optional(pool)
            .await
    }

    /// Delete an intern together with their contracts, vacations and terms
    /// (via `ON DELETE CASCADE`). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Ana"), "Ana");
    }
}
