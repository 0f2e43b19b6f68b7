//! HTTP-level tests for the dashboard views.
//!
//! Fixtures are placed relative to the real current date.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use common::{
    create_contract, create_intern, expect_data, expect_error, get, get_auth, post_json_auth,
    spawn_app,
};
use serde_json::json;
use sqlx::PgPool;

fn offset(days: i64) -> String {
    day(Utc::now().date_naive() + Duration::days(days))
}

fn day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_requires_auth(pool: PgPool) {
    let test = spawn_app(pool).await;
    let response = get(test.app(), "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_counts_interns_with_open_contracts(pool: PgPool) {
    let test = spawn_app(pool).await;
    let ana = create_intern(&test, "Ana").await;
    let bruno = create_intern(&test, "Bruno").await;
    create_intern(&test, "Carla").await;

    create_contract(&test, ana, &offset(-100), &offset(80), 1).await;
    create_contract(&test, ana, &offset(-300), &offset(-101), 2).await;
    create_contract(&test, bruno, &offset(-300), &offset(-10), 2).await;

    let summary = expect_data(
        get_auth(test.app(), "/api/v1/dashboard/summary", &test.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(summary["active_interns"], 1);
    assert_eq!(summary["total_contracts"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expiring_contracts_use_default_window(pool: PgPool) {
    let test = spawn_app(pool).await;
    let ana = create_intern(&test, "Ana").await;
    let bruno = create_intern(&test, "Bruno").await;

    let soon = create_contract(&test, ana, &offset(-90), &offset(5), 1).await;
    let later = create_contract(&test, bruno, &offset(-90), &offset(25), 3).await;
    create_contract(&test, bruno, &offset(-90), &offset(45), 1).await;
    create_contract(&test, ana, &offset(-90), &offset(3), 2).await;
    create_contract(&test, ana, &offset(-90), &offset(-1), 1).await;

    let rows = expect_data(
        get_auth(test.app(), "/api/v1/dashboard/expiring-contracts", &test.token).await,
        StatusCode::OK,
    )
    .await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["contract_id"], soon);
    assert_eq!(rows[0]["days_remaining"], 5);
    assert_eq!(rows[0]["intern_name"], "Ana");
    assert_eq!(rows[1]["contract_id"], later);
    assert_eq!(rows[1]["days_remaining"], 25);

    let week = expect_data(
        get_auth(test.app(), "/api/v1/dashboard/expiring-contracts?days=7", &test.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(week.as_array().unwrap().len(), 1);

    let two_months = expect_data(
        get_auth(test.app(), "/api/v1/dashboard/expiring-contracts?days=60", &test.token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(two_months.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unsupported_window_is_rejected(pool: PgPool) {
    let test = spawn_app(pool).await;
    let code = expect_error(
        get_auth(test.app(), "/api/v1/dashboard/expiring-contracts?days=14", &test.token).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_on_vacation_lists_current_vacations(pool: PgPool) {
    let test = spawn_app(pool).await;
    let ana = create_intern(&test, "Ana").await;
    let bruno = create_intern(&test, "Bruno").await;
    let carla = create_intern(&test, "Carla").await;

    for (intern_id, start, end) in [
        (ana, offset(-3), offset(10)),
        (bruno, offset(0), offset(2)),
        (carla, offset(1), offset(15)),
    ] {
        let response = post_json_auth(
            test.app(),
            &format!("/api/v1/interns/{intern_id}/vacations"),
            json!({ "start_date": start, "end_date": end }),
            &test.token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let rows = expect_data(
        get_auth(test.app(), "/api/v1/dashboard/on-vacation", &test.token).await,
        StatusCode::OK,
    )
    .await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["intern_id"], bruno);
    assert_eq!(rows[0]["return_date"], offset(2));
    assert_eq!(rows[0]["days_until_return"], 2);
    assert_eq!(rows[1]["intern_id"], ana);
    assert_eq!(rows[1]["days_until_return"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_cycles_need_four_closed_contracts(pool: PgPool) {
    let test = spawn_app(pool).await;
    let ana = create_intern(&test, "Ana").await;
    let bruno = create_intern(&test, "Bruno").await;

    for i in 0..4 {
        let start = offset(-800 + i * 180);
        let end = offset(-800 + i * 180 + 179);
        create_contract(&test, ana, &start, &end, 2).await;
        create_contract(&test, bruno, &start, &end, if i == 3 { 1 } else { 2 }).await;
    }

    let rows = expect_data(
        get_auth(test.app(), "/api/v1/dashboard/completed-cycles", &test.token).await,
        StatusCode::OK,
    )
    .await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["intern_id"], ana);
    assert_eq!(rows[0]["contract_count"], 4);
}
