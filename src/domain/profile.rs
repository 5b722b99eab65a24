// src/domain/profile.rs

use serde::Serialize;

/// A user's profile as seen by a particular viewer. Sections the viewer may
/// not see are present but empty, so the response shape is stable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: i64,
    pub name: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub links: Vec<LinkEntry>,
    pub participations: Vec<ParticipationEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub start_year: i64,
    pub end_year: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_year: i64,
    pub end_year: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationEntry {
    pub opportunity_id: i64,
    pub title: String,
    pub year: i64,
}
