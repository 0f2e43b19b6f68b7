//! Shared helpers for HTTP integration tests.
//!
//! Requests go through the real router built by [`build_app_router`], so the
//! middleware stack matches production.

#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use internhub_api::auth::jwt::{generate_access_token, JwtConfig};
use internhub_api::auth::password::hash_password;
use internhub_api::config::ServerConfig;
use internhub_api::router::build_app_router;
use internhub_api::state::AppState;
use internhub_db::models::admin::{Admin, CreateAdmin};
use internhub_db::repositories::AdminRepo;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "estagio-seguro-123";

/// A router wired to a test database and a throwaway upload directory,
/// plus a valid access token for a seeded admin.
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    pub token: String,
    pub admin: Admin,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.join("terms"),
        jwt: JwtConfig {
            secret: "internhub-integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
        bootstrap_admin: None,
    }
}

/// Seed an admin, build the router, and sign a token for that admin.
pub async fn spawn_app(pool: PgPool) -> TestApp {
    let admin = create_admin(&pool, "Coordenação RH", "rh@internhub.test").await;

    let upload_dir = tempfile::tempdir().expect("temp dir should be created");
    let config = test_config(upload_dir.path());
    let token = generate_access_token(admin.id, &config.jwt).expect("token should be signed");
    let router = build_app_router(AppState::new(pool.clone(), config));

    TestApp {
        router,
        pool,
        token,
        admin,
        upload_dir,
    }
}

pub async fn create_admin(pool: &PgPool, name: &str, email: &str) -> Admin {
    let input = CreateAdmin {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    AdminRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = builder(Method::POST, uri, None)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = builder(Method::POST, uri, Some(token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, builder(Method::POST, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = builder(Method::PUT, uri, Some(token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

/// POST a `multipart/form-data` body with a single `file` field.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    filename: &str,
    data: &[u8],
    token: &str,
) -> Response {
    let boundary = "internhub-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = builder(Method::POST, uri, Some(token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Assert the status and return the `data` field of the envelope.
pub async fn expect_data(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await["data"].clone()
}

/// Assert an error response and return its `code`.
pub async fn expect_error(response: Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    json["code"].as_str().unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_intern(test: &TestApp, name: &str) -> i64 {
    let response = post_json_auth(
        test.app(),
        "/api/v1/interns",
        serde_json::json!({ "name": name, "shift": "afternoon" }),
        &test.token,
    )
    .await;
    expect_data(response, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap()
}

pub async fn create_contract(
    test: &TestApp,
    intern_id: i64,
    start: &str,
    end: &str,
    status_id: i16,
) -> i64 {
    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/interns/{intern_id}/contracts"),
        serde_json::json!({ "start_date": start, "end_date": end, "status_id": status_id }),
        &test.token,
    )
    .await;
    expect_data(response, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap()
}
