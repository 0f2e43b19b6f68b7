//! HTTP-level tests for login, token refresh, logout and admin management.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_admin, expect_data, expect_error, get, get_auth, post_auth, post_json,
    post_json_auth, spawn_app, TEST_PASSWORD,
};
use internhub_api::bootstrap::ensure_bootstrap_admin;
use internhub_api::config::BootstrapAdmin;
use internhub_db::repositories::AdminRepo;
use serde_json::json;
use sqlx::PgPool;

async fn login(app: axum::Router, email: &str, password: &str) -> axum::response::Response {
    post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": email, "password": password }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Login / refresh / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_returns_token_pair(pool: PgPool) {
    let test = spawn_app(pool).await;

    let response = login(test.app(), "rh@internhub.test", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["admin"]["id"], test.admin.id);
    assert!(json["admin"].get("password_hash").is_none());

    let token = json["access_token"].as_str().unwrap();
    let response = get_auth(test.app(), "/api/v1/interns", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bad_credentials_share_one_message(pool: PgPool) {
    let test = spawn_app(pool).await;

    let wrong_password = login(test.app(), "rh@internhub.test", "not-the-password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_email = login(test.app(), "ghost@internhub.test", TEST_PASSWORD).await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    assert_eq!(wrong_password["error"], "Invalid email or password");
    assert_eq!(wrong_password, unknown_email);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_the_token(pool: PgPool) {
    let test = spawn_app(pool).await;
    let json = body_json(login(test.app(), "rh@internhub.test", TEST_PASSWORD).await).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        test.app(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"].as_str().unwrap(), refresh_token);

    // The old token was revoked by the rotation.
    let reused = post_json(
        test.app(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(reused.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_refresh_sessions(pool: PgPool) {
    let test = spawn_app(pool).await;
    let json = body_json(login(test.app(), "rh@internhub.test", TEST_PASSWORD).await).await;
    let access = json["access_token"].as_str().unwrap();
    let refresh = json["refresh_token"].as_str().unwrap();

    let response = post_auth(test.app(), "/api/v1/auth/logout", access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        test.app(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_routes_require_a_token(pool: PgPool) {
    let test = spawn_app(pool).await;

    let code = expect_error(get(test.app(), "/api/v1/interns").await, StatusCode::UNAUTHORIZED).await;
    assert_eq!(code, "UNAUTHORIZED");

    let response = get_auth(test.app(), "/api/v1/dashboard/summary", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Admin management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admins_can_be_created_and_listed(pool: PgPool) {
    let test = spawn_app(pool).await;

    let body = json!({ "name": "Secretaria", "email": "sec@internhub.test", "password": "senha-forte-1" });
    let created = expect_data(
        post_json_auth(test.app(), "/api/v1/admins", body.clone(), &test.token).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["email"], "sec@internhub.test");

    let code = expect_error(
        post_json_auth(test.app(), "/api/v1/admins", body, &test.token).await,
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(code, "CONFLICT");

    let listed = expect_data(
        get_auth(test.app(), "/api/v1/admins", &test.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let response = login(test.app(), "sec@internhub.test", "senha-forte-1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_weak_admin_password_is_rejected(pool: PgPool) {
    let test = spawn_app(pool).await;
    let body = json!({ "name": "Secretaria", "email": "sec@internhub.test", "password": "123" });
    let code = expect_error(
        post_json_auth(test.app(), "/api/v1/admins", body, &test.token).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_seeds_only_an_empty_table(pool: PgPool) {
    let seed = BootstrapAdmin {
        name: "Root".to_string(),
        email: "root@internhub.test".to_string(),
        password: "bootstrap-pass".to_string(),
    };

    let created = ensure_bootstrap_admin(&pool, Some(&seed)).await.unwrap();
    assert_eq!(created.unwrap().email, "root@internhub.test");

    let again = ensure_bootstrap_admin(&pool, Some(&seed)).await.unwrap();
    assert!(again.is_none());
    assert_eq!(AdminRepo::count(&pool).await.unwrap(), 1);

    assert!(ensure_bootstrap_admin(&pool, None).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_is_skipped_when_admins_exist(pool: PgPool) {
    create_admin(&pool, "Existing", "existing@internhub.test").await;
    let seed = BootstrapAdmin {
        name: "Root".to_string(),
        email: "root@internhub.test".to_string(),
        password: "bootstrap-pass".to_string(),
    };
    assert!(ensure_bootstrap_admin(&pool, Some(&seed)).await.unwrap().is_none());
}
