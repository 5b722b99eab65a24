// src/db/profiles.rs
//
// Assembles the privacy-filtered profile view. The friendship edge is
// evaluated once per request; each section is then loaded only if the
// viewer may see it, and participations are filtered row by row since
// every record carries its own privacy level.

use crate::db::{friendships, users};
use crate::domain::privacy::can_view;
use crate::domain::profile::{
    EducationEntry, ExperienceEntry, LinkEntry, ParticipationEntry, ProfileView,
};
use crate::domain::status::PrivacyLevel;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn load_profile(
    conn: &Connection,
    owner_id: i64,
    viewer: Option<i64>,
) -> Result<Option<ProfileView>, ServerError> {
    let Some(user) = users::get_user(conn, owner_id)? else {
        return Ok(None);
    };

    let are_friends = match viewer {
        Some(v) if v != owner_id => friendships::are_friends(conn, v, owner_id)?,
        _ => false,
    };
    let visible = |level: PrivacyLevel| can_view(viewer, owner_id, level, are_friends);

    let education = if visible(user.education_privacy) {
        load_education(conn, owner_id)?
    } else {
        Vec::new()
    };
    let experience = if visible(user.experience_privacy) {
        load_experience(conn, owner_id)?
    } else {
        Vec::new()
    };
    let skills = if visible(user.skills_privacy) {
        load_skills(conn, owner_id)?
    } else {
        Vec::new()
    };
    let links = if visible(user.links_privacy) {
        load_links(conn, owner_id)?
    } else {
        Vec::new()
    };

    let participations = load_participations(conn, owner_id)?
        .into_iter()
        .filter(|(_, level)| visible(*level))
        .map(|(entry, _)| entry)
        .collect();

    Ok(Some(ProfileView {
        id: user.id,
        name: user.name,
        education,
        experience,
        skills,
        links,
        participations,
    }))
}

fn load_education(conn: &Connection, user_id: i64) -> Result<Vec<EducationEntry>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select school, degree, start_year, end_year
             from education where user_id = ?1 order by start_year desc",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], |r| {
            Ok(EducationEntry {
                school: r.get(0)?,
                degree: r.get(1)?,
                start_year: r.get(2)?,
                end_year: r.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn load_experience(conn: &Connection, user_id: i64) -> Result<Vec<ExperienceEntry>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select company, title, start_year, end_year
             from experience where user_id = ?1 order by start_year desc",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], |r| {
            Ok(ExperienceEntry {
                company: r.get(0)?,
                title: r.get(1)?,
                start_year: r.get(2)?,
                end_year: r.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn load_skills(conn: &Connection, user_id: i64) -> Result<Vec<String>, ServerError> {
    let mut stmt = conn
        .prepare("select name from skills where user_id = ?1 order by name")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], |r| r.get(0))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn load_links(conn: &Connection, user_id: i64) -> Result<Vec<LinkEntry>, ServerError> {
    let mut stmt = conn
        .prepare("select label, url from links where user_id = ?1 order by label")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], |r| {
            Ok(LinkEntry {
                label: r.get(0)?,
                url: r.get(1)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn load_participations(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<(ParticipationEntry, PrivacyLevel)>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select p.opportunity_id, o.title, p.year, p.privacy
             from participations p
             join opportunities o on o.id = p.opportunity_id
             where p.user_id = ?1
             order by p.year desc",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], |r| {
            Ok((
                ParticipationEntry {
                    opportunity_id: r.get(0)?,
                    title: r.get(1)?,
                    year: r.get(2)?,
                },
                r.get::<_, PrivacyLevel>(3)?,
            ))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
