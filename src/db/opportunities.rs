use crate::domain::opportunity::Opportunity;
use crate::domain::status::OpportunityStatus;
use crate::domain::{CLOSING_SOON_WINDOW_DAYS, NEW_WINDOW_DAYS, POPULAR_VISIT_THRESHOLD};
use crate::errors::ServerError;
use chrono::{Duration, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

// The five lifecycle updates below are deliberately plain conditional bulk
// UPDATEs: each one is idempotent and only moves records forward, so a pass
// may be re-run (or overlap with another pass) without corrupting state.
// All time bounds are computed from the caller-supplied `now` so one pass
// reasons about a single instant.

/// Step 1: opening-soon opportunities whose start date has arrived become active.
/// Records without a start date are left alone.
pub fn activate_started(conn: &Connection, now: NaiveDateTime) -> Result<usize, ServerError> {
    conn.execute(
        "update opportunities set status = 'ACTIVE'
         where status = 'OPENING_SOON' and start_date is not null and start_date <= ?1",
        params![now],
    )
    .map_err(|e| ServerError::DbError(format!("activate opportunities failed: {e}")))
}

/// Step 2: active opportunities whose deadline falls within the closing window.
pub fn mark_closing_soon(conn: &Connection, now: NaiveDateTime) -> Result<usize, ServerError> {
    let window_end = now + Duration::days(CLOSING_SOON_WINDOW_DAYS);
    conn.execute(
        "update opportunities set status = 'CLOSING_SOON'
         where status = 'ACTIVE' and deadline > ?1 and deadline <= ?2",
        params![now, window_end],
    )
    .map_err(|e| ServerError::DbError(format!("mark closing soon failed: {e}")))
}

/// Step 3: anything past its deadline closes, whatever else happened this pass.
pub fn close_past_deadline(conn: &Connection, now: NaiveDateTime) -> Result<usize, ServerError> {
    conn.execute(
        "update opportunities set status = 'CLOSED'
         where status in ('ACTIVE', 'CLOSING_SOON') and deadline <= ?1",
        params![now],
    )
    .map_err(|e| ServerError::DbError(format!("close opportunities failed: {e}")))
}

/// Step 4: flag opportunities that crossed the visit threshold. Never unsets.
pub fn mark_popular(conn: &Connection) -> Result<usize, ServerError> {
    conn.execute(
        "update opportunities set is_popular = 1
         where visit_count >= ?1 and is_popular = 0",
        params![POPULAR_VISIT_THRESHOLD],
    )
    .map_err(|e| ServerError::DbError(format!("mark popular failed: {e}")))
}

/// Step 5: clear the new flag once a record has aged out of the window.
/// Never sets it back.
pub fn clear_new_flag(conn: &Connection, now: NaiveDateTime) -> Result<usize, ServerError> {
    let cutoff = now - Duration::days(NEW_WINDOW_DAYS);
    conn.execute(
        "update opportunities set is_new = 0
         where created_at <= ?1 and is_new = 1",
        params![cutoff],
    )
    .map_err(|e| ServerError::DbError(format!("clear new flag failed: {e}")))
}

const SELECT_OPPORTUNITY: &str = "select id, organization, title, description, status,
        start_date, deadline, visit_count, is_popular, is_new, created_at
 from opportunities";

fn map_opportunity(row: &Row<'_>) -> rusqlite::Result<Opportunity> {
    Ok(Opportunity {
        id: row.get(0)?,
        organization: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        status: row.get(4)?,
        start_date: row.get(5)?,
        deadline: row.get(6)?,
        visit_count: row.get(7)?,
        is_popular: row.get(8)?,
        is_new: row.get(9)?,
        created_at: row.get(10)?,
    })
}

pub fn get_opportunity(conn: &Connection, id: i64) -> Result<Option<Opportunity>, ServerError> {
    conn.query_row(
        &format!("{SELECT_OPPORTUNITY} where id = ?1"),
        params![id],
        map_opportunity,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select opportunity failed: {e}")))
}

pub fn list_opportunities(
    conn: &Connection,
    status: Option<OpportunityStatus>,
) -> Result<Vec<Opportunity>, ServerError> {
    let mut out = Vec::new();
    match status {
        Some(status) => {
            let mut stmt = conn
                .prepare(&format!(
                    "{SELECT_OPPORTUNITY} where status = ?1 order by deadline"
                ))
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            let rows = stmt
                .query_map(params![status], map_opportunity)
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            for row in rows {
                out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
            }
        }
        None => {
            let mut stmt = conn
                .prepare(&format!("{SELECT_OPPORTUNITY} order by deadline"))
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            let rows = stmt
                .query_map([], map_opportunity)
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            for row in rows {
                out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
            }
        }
    }
    Ok(out)
}

/// Bump the detail-page visit counter. Returns false when the id is unknown.
pub fn record_visit(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let updated = conn
        .execute(
            "update opportunities set visit_count = visit_count + 1 where id = ?1",
            params![id],
        )
        .map_err(|e| ServerError::DbError(format!("record visit failed: {e}")))?;
    Ok(updated == 1)
}
