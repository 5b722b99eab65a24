// src/tests/router_tests/profile_tests.rs
//
// Profile visibility through the HTTP surface: owner, friend, stranger,
// and anonymous viewers against per-section and per-participation levels.

use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_json, make_state, request};
use chrono::Utc;
use http::Method;
use rusqlite::params;

fn seed_user(
    state: &AppState,
    email: &str,
    name: &str,
    education_privacy: &str,
    skills_privacy: &str,
    links_privacy: &str,
) -> i64 {
    let now = Utc::now().naive_utc();
    state
        .db
        .with_conn(|conn| {
            conn.execute(
                "insert into users
                    (email, name, created_at,
                     education_privacy, experience_privacy, skills_privacy, links_privacy)
                 values (?1, ?2, ?3, ?4, 'PUBLIC', ?5, ?6)",
                params![email, name, now, education_privacy, skills_privacy, links_privacy],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
            Ok(conn.last_insert_rowid())
        })
        .unwrap()
}

/// Owner with FRIENDS_ONLY education, PUBLIC skills/experience, ONLY_ME links,
/// one public and one private participation. Returns (owner, friend, stranger).
fn seed_profile_fixture(state: &AppState) -> (i64, i64, i64) {
    let owner = seed_user(
        state,
        "sokha@example.com",
        "Sokha",
        "FRIENDS_ONLY",
        "PUBLIC",
        "ONLY_ME",
    );
    let friend = seed_user(
        state,
        "dara@example.com",
        "Dara",
        "PUBLIC",
        "PUBLIC",
        "PUBLIC",
    );
    let stranger = seed_user(
        state,
        "visal@example.com",
        "Visal",
        "PUBLIC",
        "PUBLIC",
        "PUBLIC",
    );

    let now = Utc::now().naive_utc();
    state
        .db
        .with_conn(|conn| {
            // Edge stored friend -> owner; lookups must work in both directions.
            conn.execute(
                "insert into friendships (user_a, user_b, created_at) values (?1, ?2, ?3)",
                params![friend, owner, now],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

            conn.execute(
                "insert into education (user_id, school, degree, start_year, end_year)
                 values (?1, 'Royal University of Phnom Penh', 'BSc Computer Science', 2019, 2023)",
                params![owner],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

            conn.execute(
                "insert into skills (user_id, name) values (?1, 'Rust'), (?1, 'SQL')",
                params![owner],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

            conn.execute(
                "insert into links (user_id, label, url)
                 values (?1, 'Portfolio', 'https://sokha.example.com')",
                params![owner],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

            conn.execute(
                "insert into opportunities (organization, title, status, deadline, created_at)
                 values ('Impact Hub', 'Mentorship program', 'CLOSED', ?1, ?1),
                        ('Tech Cabinet', 'Civic fellowship', 'CLOSED', ?1, ?1)",
                params![now],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

            conn.execute(
                "insert into participations (user_id, opportunity_id, year, privacy, created_at)
                 values (?1, 1, 2023, 'PUBLIC', ?2),
                        (?1, 2, 2024, 'ONLY_ME', ?2)",
                params![owner, now],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

            Ok(())
        })
        .unwrap();

    (owner, friend, stranger)
}

fn fetch_profile(state: &AppState, owner: i64, viewer: Option<i64>) -> serde_json::Value {
    let uri = match viewer {
        Some(v) => format!("/api/users/{owner}/profile?viewer={v}"),
        None => format!("/api/users/{owner}/profile"),
    };
    let mut resp = handle(request(Method::GET, &uri), state).unwrap();
    assert_eq!(resp.status(), 200);
    body_json(&mut resp)
}

#[test]
fn owner_sees_every_section_and_record() {
    let state = make_state();
    let (owner, _, _) = seed_profile_fixture(&state);

    let body = fetch_profile(&state, owner, Some(owner));
    assert_eq!(body["name"], serde_json::json!("Sokha"));
    assert_eq!(body["education"].as_array().unwrap().len(), 1);
    assert_eq!(body["skills"].as_array().unwrap().len(), 2);
    assert_eq!(body["links"].as_array().unwrap().len(), 1);
    assert_eq!(body["participations"].as_array().unwrap().len(), 2);
}

#[test]
fn friend_sees_friends_only_sections_but_not_only_me() {
    let state = make_state();
    let (owner, friend, _) = seed_profile_fixture(&state);

    let body = fetch_profile(&state, owner, Some(friend));
    assert_eq!(body["education"].as_array().unwrap().len(), 1);
    assert_eq!(body["skills"].as_array().unwrap().len(), 2);
    assert!(body["links"].as_array().unwrap().is_empty());

    let participations = body["participations"].as_array().unwrap();
    assert_eq!(participations.len(), 1);
    assert_eq!(
        participations[0]["title"],
        serde_json::json!("Mentorship program")
    );
}

#[test]
fn stranger_gets_empty_friends_only_sections() {
    let state = make_state();
    let (owner, _, stranger) = seed_profile_fixture(&state);

    let body = fetch_profile(&state, owner, Some(stranger));
    assert!(body["education"].as_array().unwrap().is_empty());
    assert_eq!(body["skills"].as_array().unwrap().len(), 2);
    assert!(body["links"].as_array().unwrap().is_empty());
    assert_eq!(body["participations"].as_array().unwrap().len(), 1);
}

#[test]
fn anonymous_viewer_is_treated_like_a_stranger() {
    let state = make_state();
    let (owner, _, _) = seed_profile_fixture(&state);

    let body = fetch_profile(&state, owner, None);
    assert!(body["education"].as_array().unwrap().is_empty());
    assert_eq!(body["skills"].as_array().unwrap().len(), 2);
}

#[test]
fn unknown_user_is_not_found() {
    let state = make_state();

    let err = handle(request(Method::GET, "/api/users/999/profile"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn malformed_viewer_parameter_is_a_bad_request() {
    let state = make_state();
    let (owner, _, _) = seed_profile_fixture(&state);

    let err = handle(
        request(Method::GET, &format!("/api/users/{owner}/profile?viewer=me")),
        &state,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
