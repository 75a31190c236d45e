use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateDeadlineDto {
    pub course_id: Option<i32>,
    pub section: Option<String>,
    /// `theory` or `lab`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub details: Option<String>,
    pub submission_link: Option<String>,
    /// RFC 3339 timestamp.
    pub last_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeadlineDto {
    pub title: Option<String>,
    pub details: Option<String>,
    pub submission_link: Option<String>,
    pub last_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CompletionDto {
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeadlineDto {
    pub id: String,
    pub course_id: i32,
    pub section: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub details: String,
    pub submission_link: Option<String>,
    pub last_date: DateTime<Utc>,
    pub created_by: i32,
    pub created_by_name: String,
    pub created_by_student_id: String,
    pub created_at: DateTime<Utc>,
    pub agree_count: u64,
    pub disagree_count: u64,
    /// `agree`, `disagree` or absent.
    pub user_vote: Option<String>,
}

/// A deadline as copied into a user's own list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDeadlineDto {
    pub deadline_id: String,
    pub course_id: i32,
    pub course_code: String,
    pub course_name: String,
    pub section: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub details: String,
    pub submission_link: Option<String>,
    pub last_date: DateTime<Utc>,
    pub created_by_name: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FinishedDeadlinesDto {
    pub theory: Vec<DeadlineDto>,
    pub lab: Vec<DeadlineDto>,
}
