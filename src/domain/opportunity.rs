use crate::domain::status::OpportunityStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A full opportunity record as stored, and as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: i64,
    pub organization: String,
    pub title: String,
    pub description: String,
    pub status: OpportunityStatus,
    pub start_date: Option<NaiveDateTime>,
    pub deadline: NaiveDateTime,
    pub visit_count: i64,
    pub is_popular: bool,
    pub is_new: bool,
    pub created_at: NaiveDateTime,
}
