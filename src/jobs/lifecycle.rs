// src/jobs/lifecycle.rs
//
// The periodic status-update pass over all opportunities. Invoked from the
// trigger endpoint; `now` is injected once so every step reasons about the
// same instant.
//
// The five steps are not wrapped in a transaction: each one is idempotent
// and only moves records forward, so a pass that fails partway leaves valid
// state behind and the next scheduled pass completes the remainder. Step
// order matters only in that closing must see the output of activation.

use crate::db::connection::Database;
use crate::db::opportunities;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

/// Per-step affected-row counts for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateSummary {
    pub active: usize,
    pub closing_soon: usize,
    pub closed: usize,
    pub popular: usize,
    pub not_new: usize,
}

pub fn run_status_update(
    db: &Database,
    now: NaiveDateTime,
) -> Result<StatusUpdateSummary, ServerError> {
    let summary = db.with_conn(|conn| {
        let active = opportunities::activate_started(conn, now)?;
        let closing_soon = opportunities::mark_closing_soon(conn, now)?;
        let closed = opportunities::close_past_deadline(conn, now)?;
        let popular = opportunities::mark_popular(conn)?;
        let not_new = opportunities::clear_new_flag(conn, now)?;

        Ok(StatusUpdateSummary {
            active,
            closing_soon,
            closed,
            popular,
            not_new,
        })
    })?;

    info!(
        active = summary.active,
        closing_soon = summary.closing_soon,
        closed = summary.closed,
        popular = summary.popular,
        not_new = summary.not_new,
        "opportunity status update complete"
    );

    Ok(summary)
}
