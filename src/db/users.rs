// src/db/users.rs
use crate::domain::status::PrivacyLevel;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub education_privacy: PrivacyLevel,
    pub experience_privacy: PrivacyLevel,
    pub skills_privacy: PrivacyLevel,
    pub links_privacy: PrivacyLevel,
}

pub fn get_user(conn: &Connection, id: i64) -> Result<Option<UserRow>, ServerError> {
    conn.query_row(
        "select id, name,
                education_privacy, experience_privacy, skills_privacy, links_privacy
         from users where id = ?1",
        params![id],
        |r| {
            Ok(UserRow {
                id: r.get(0)?,
                name: r.get(1)?,
                education_privacy: r.get(2)?,
                experience_privacy: r.get(3)?,
                skills_privacy: r.get(4)?,
                links_privacy: r.get(5)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}
