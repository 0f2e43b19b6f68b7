//! Request extractors shared by protected handlers.
//!
//! - [`auth::AuthUser`] -- the administrator behind a JWT Bearer token.

pub mod auth;
