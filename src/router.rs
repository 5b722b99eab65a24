use crate::auth::guard::require_cron_secret;
use crate::db::{opportunities, profiles};
use crate::domain::status::OpportunityStatus;
use crate::errors::{ResultResp, ServerError};
use crate::jobs::lifecycle::run_status_update;
use crate::responses::json_response;
use crate::state::AppState;
use astra::Request;
use chrono::Utc;
use serde_json::json;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => json_response(&json!({ "service": "camboconnect", "status": "ok" })),
        ("POST", "/api/cron/update-statuses") => trigger_status_update(&req, state),
        ("GET", "/api/opportunities") => list_opportunities(&req, state),
        _ => route_dynamic(method, path, &req, state),
    }
}

fn route_dynamic(method: &str, path: &str, req: &Request, state: &AppState) -> ResultResp {
    if method == "GET" {
        if let Some(rest) = path.strip_prefix("/api/opportunities/") {
            let id = parse_id(rest)?;
            return opportunity_detail(state, id);
        }
        if let Some(rest) = path.strip_prefix("/api/users/") {
            if let Some(raw_id) = rest.strip_suffix("/profile") {
                let id = parse_id(raw_id)?;
                return user_profile(req, state, id);
            }
        }
    }
    Err(ServerError::NotFound)
}

/// POST /api/cron/update-statuses — the scheduler-facing trigger. The wall
/// clock is read once here so the whole pass shares a single instant.
fn trigger_status_update(req: &Request, state: &AppState) -> ResultResp {
    require_cron_secret(req, &state.config)?;

    let now = Utc::now();
    let summary = run_status_update(&state.db, now.naive_utc())?;

    json_response(&json!({
        "success": true,
        "updated": summary,
        "timestamp": now.to_rfc3339(),
    }))
}

fn list_opportunities(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let status = match params.get("status") {
        Some(raw) => Some(
            OpportunityStatus::parse(raw)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown status: {raw}")))?,
        ),
        None => None,
    };

    let rows = state
        .db
        .with_conn(|conn| opportunities::list_opportunities(conn, status))?;

    json_response(&json!({ "opportunities": rows }))
}

/// GET /api/opportunities/{id} — every detail view counts as a visit, which
/// feeds the popularity rule of the status-update job.
fn opportunity_detail(state: &AppState, id: i64) -> ResultResp {
    let row = state.db.with_conn(|conn| {
        if !opportunities::record_visit(conn, id)? {
            return Ok(None);
        }
        opportunities::get_opportunity(conn, id)
    })?;

    match row {
        Some(opportunity) => json_response(&opportunity),
        None => Err(ServerError::NotFound),
    }
}

/// GET /api/users/{id}/profile — the viewer identity arrives resolved (the
/// session layer in front of this service is out of scope here), so it is
/// read from the `viewer` query parameter; absent means anonymous.
fn user_profile(req: &Request, state: &AppState, owner_id: i64) -> ResultResp {
    let params = parse_query(req);
    let viewer = match params.get("viewer") {
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| ServerError::BadRequest(format!("invalid viewer id: {raw}")))?,
        ),
        None => None,
    };

    let profile = state
        .db
        .with_conn(|conn| profiles::load_profile(conn, owner_id, viewer))?;

    match profile {
        Some(profile) => json_response(&profile),
        None => Err(ServerError::NotFound),
    }
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>().map_err(|_| ServerError::NotFound)
}

fn parse_query(req: &Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
