//! First-start seeding of the administrator account.

use internhub_db::models::admin::{Admin, CreateAdmin};
use internhub_db::repositories::AdminRepo;
use internhub_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create `seed` as the first admin if the `admins` table is empty.
///
/// Returns the created admin, or `None` when nothing was seeded.
pub async fn ensure_bootstrap_admin(
    pool: &DbPool,
    seed: Option<&BootstrapAdmin>,
) -> AppResult<Option<Admin>> {
    let Some(seed) = seed else {
        return Ok(None);
    };

    if AdminRepo::count(pool).await? > 0 {
        tracing::debug!("Admins already present, skipping bootstrap");
        return Ok(None);
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            name: seed.name.clone(),
            email: seed.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, email = %admin.email, "Bootstrap admin created");
    Ok(Some(admin))
}
