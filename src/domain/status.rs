// src/domain/status.rs

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;

/// Lifecycle state of an opportunity. Transitions only move forward:
/// OPENING_SOON -> ACTIVE -> CLOSING_SOON -> CLOSED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityStatus {
    OpeningSoon,
    Active,
    ClosingSoon,
    Closed,
}

impl OpportunityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityStatus::OpeningSoon => "OPENING_SOON",
            OpportunityStatus::Active => "ACTIVE",
            OpportunityStatus::ClosingSoon => "CLOSING_SOON",
            OpportunityStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OPENING_SOON" => Some(OpportunityStatus::OpeningSoon),
            "ACTIVE" => Some(OpportunityStatus::Active),
            "CLOSING_SOON" => Some(OpportunityStatus::ClosingSoon),
            "CLOSED" => Some(OpportunityStatus::Closed),
            _ => None,
        }
    }
}

impl ToSql for OpportunityStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for OpportunityStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Self::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown opportunity status: {s}").into()))
    }
}

/// Visibility level a user assigns to a profile section or participation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrivacyLevel {
    Public,
    FriendsOnly,
    OnlyMe,
}

impl PrivacyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            PrivacyLevel::Public => "PUBLIC",
            PrivacyLevel::FriendsOnly => "FRIENDS_ONLY",
            PrivacyLevel::OnlyMe => "ONLY_ME",
        }
    }

    /// Unrecognized stored levels collapse to the most restrictive one.
    pub fn parse(s: &str) -> Self {
        match s {
            "PUBLIC" => PrivacyLevel::Public,
            "FRIENDS_ONLY" => PrivacyLevel::FriendsOnly,
            _ => PrivacyLevel::OnlyMe,
        }
    }
}

impl ToSql for PrivacyLevel {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for PrivacyLevel {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(Self::parse(value.as_str()?))
    }
}
