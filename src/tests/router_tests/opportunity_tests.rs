// src/tests/router_tests/opportunity_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_json, make_state, request};
use chrono::{Duration, Utc};
use http::Method;
use rusqlite::params;

fn seed_opportunity(state: &AppState, title: &str, status: &str) -> i64 {
    let now = Utc::now().naive_utc();
    state
        .db
        .with_conn(|conn| {
            conn.execute(
                "insert into opportunities
                    (organization, title, description, status, deadline, created_at)
                 values ('Impact Hub', ?1, 'A summer internship.', ?2, ?3, ?4)",
                params![title, status, now + Duration::days(30), now],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
            Ok(conn.last_insert_rowid())
        })
        .unwrap()
}

#[test]
fn detail_increments_the_visit_counter() {
    let state = make_state();
    let id = seed_opportunity(&state, "Research internship", "ACTIVE");

    let mut first = handle(
        request(Method::GET, &format!("/api/opportunities/{id}")),
        &state,
    )
    .unwrap();
    assert_eq!(first.status(), 200);
    let body = body_json(&mut first);
    assert_eq!(body["title"], serde_json::json!("Research internship"));
    assert_eq!(body["visitCount"], serde_json::json!(1));

    let mut second = handle(
        request(Method::GET, &format!("/api/opportunities/{id}")),
        &state,
    )
    .unwrap();
    assert_eq!(body_json(&mut second)["visitCount"], serde_json::json!(2));
}

#[test]
fn detail_returns_not_found_for_unknown_ids() {
    let state = make_state();

    let err = handle(request(Method::GET, "/api/opportunities/42"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(request(Method::GET, "/api/opportunities/banana"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn list_can_filter_by_status() {
    let state = make_state();
    seed_opportunity(&state, "open one", "ACTIVE");
    seed_opportunity(&state, "open two", "ACTIVE");
    seed_opportunity(&state, "done", "CLOSED");

    let mut all = handle(request(Method::GET, "/api/opportunities"), &state).unwrap();
    assert_eq!(body_json(&mut all)["opportunities"].as_array().unwrap().len(), 3);

    let mut active = handle(
        request(Method::GET, "/api/opportunities?status=ACTIVE"),
        &state,
    )
    .unwrap();
    let body = body_json(&mut active);
    let rows = body["opportunities"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["status"], serde_json::json!("ACTIVE"));
    }
}

#[test]
fn list_rejects_an_unknown_status_filter() {
    let state = make_state();

    let err = handle(
        request(Method::GET, "/api/opportunities?status=OPEN"),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
