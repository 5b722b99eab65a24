// src/db/friendships.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// Friendship edges are stored once; either direction counts.
pub fn are_friends(conn: &Connection, a: i64, b: i64) -> Result<bool, ServerError> {
    conn.query_row(
        "select exists(
            select 1 from friendships
            where (user_a = ?1 and user_b = ?2)
               or (user_a = ?2 and user_b = ?1)
         )",
        params![a, b],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("friendship lookup failed: {e}")))
}
