use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default directory for commitment-term files.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads/terms";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding uploaded commitment terms (default: `uploads/terms`).
    pub upload_dir: PathBuf,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// First administrator to create when the `admins` table is empty.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Credentials for the administrator seeded on first start.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `UPLOAD_DIR`               | `uploads/terms`            |
    /// | `BOOTSTRAP_ADMIN_EMAIL`    | unset (no seeding)         |
    /// | `BOOTSTRAP_ADMIN_PASSWORD` | unset (no seeding)         |
    /// | `BOOTSTRAP_ADMIN_NAME`     | `Administrator`            |
    ///
    /// # Panics
    ///
    /// Panics on unparsable numbers and when `JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into()),
        );

        let bootstrap_admin = bootstrap_admin_from_parts(
            std::env::var("BOOTSTRAP_ADMIN_EMAIL").ok(),
            std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
            std::env::var("BOOTSTRAP_ADMIN_NAME").ok(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            jwt: JwtConfig::from_env(),
            bootstrap_admin,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Seeding needs both an email and a password; the name is optional.
fn bootstrap_admin_from_parts(
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
) -> Option<BootstrapAdmin> {
    let email = email.filter(|e| !e.trim().is_empty())?;
    let password = password.filter(|p| !p.is_empty())?;
    Some(BootstrapAdmin {
        name: name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Administrator".into()),
        email: email.trim().to_string(),
        password,
    })
}
