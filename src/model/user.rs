use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub student_id: String,
    pub picture_url: String,
    pub theme_color: String,
    pub is_admin: bool,
    pub admin_club_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Minimal user card used by `by-ids` lookups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub picture_url: String,
}

/// User card used by search and connection lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserCardDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub picture_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentDto {
    pub student_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CheckUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub student_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub picture_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InterestsDto {
    pub interests: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UsernameDto {
    pub username: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub student_id: String,
    pub picture_url: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub snapchat: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
    pub theme_color: String,
    pub interests: Vec<String>,
    /// Present only when a registered viewer requested the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_sent_request: Option<bool>,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub snapchat: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
    pub theme_color: Option<String>,
}
