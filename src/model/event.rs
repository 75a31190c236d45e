use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    pub created_by: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// `HH:MM`, UTC.
    pub time: String,
    pub location: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub image_bucket: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub image_bucket: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventPaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_events: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EventPageDto {
    pub events: Vec<EventDto>,
    pub pagination: EventPaginationDto,
}

/// Attendee row shown to the organizing club admin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub picture_url: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegisteredEventDto {
    pub event: EventDto,
    pub status: String,
    pub registered_at: DateTime<Utc>,
    pub is_past: bool,
}
