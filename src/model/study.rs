use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StartStudySessionDto {
    pub room_slug: Option<String>,
    /// Defaults to every accepted connection.
    pub invitees: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudySessionDto {
    pub room_slug: String,
    pub meet_url: String,
    pub invited_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudyInviteDto {
    pub id: i32,
    pub room_slug: String,
    pub meet_url: String,
    pub host_id: i32,
    pub host_name: String,
    pub host_email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DismissInviteDto {
    pub invite_id: i32,
}
