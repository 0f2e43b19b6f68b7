//! Repository for the `admins` table.

use internhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

/// Provides CRUD operations for administrator accounts.
pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new admin, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an admin by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an admin by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE email = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all admins ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY name, id");
        sqlx::query_as::<_, Admin>(&query).fetch_all(pool).await
    }

    /// Number of admin accounts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(pool)
            .await
    }
}
