use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DirectoryDto {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub title: String,
    pub owner_id: Option<i32>,
    pub visibility: String,
    pub parent_id: Option<i32>,
    pub subdirectory_kind: Option<String>,
    pub resource_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[cfg_attr(feature = "server", schema(no_recursion))]
    pub subdirectories: Vec<DirectoryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPageDto {
    pub items: Vec<DirectoryDto>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ValidateDirectoryDto {
    pub course_code: String,
    pub course_name: Option<String>,
    #[serde(default)]
    pub ignore_duplicates: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DirectoryValidationDto {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_lab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateDirectoryDto {
    #[serde(default)]
    pub course_code: String,
    pub course_name: Option<String>,
    #[serde(default)]
    pub title: String,
    pub visibility: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DirectoryVisibilityDto {
    pub visibility: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub directory_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    /// `file` or `youtube`
    pub kind: String,
    pub url: String,
    pub mime: Option<String>,
    pub bytes: Option<i64>,
    /// `PDF`, `DOCX`, `VIDEO`, `TEXT`, `ZIP`, `DRIVE` or `LINK`
    pub file_type: String,
    /// Human readable size such as `1.5 MB`.
    pub size_label: Option<String>,
    pub original_name: Option<String>,
    pub video_id: Option<String>,
    pub owner_id: Option<i32>,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    /// `up`, `down` or absent.
    pub user_vote: Option<String>,
}

/// Public resources of one course.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CourseResourcesDto {
    pub course_code: String,
    pub course_name: String,
    pub count: u64,
    pub resources: Vec<ResourceDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResourcePageDto {
    pub items: Vec<ResourceDto>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FileInputDto {
    pub url: Option<String>,
    pub mime: Option<String>,
    pub bytes: Option<i64>,
    pub provider: Option<String>,
    pub storage_path: Option<String>,
    pub original_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct YoutubeInputDto {
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceDto {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub directory_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `file` (default) or `youtube`
    pub kind: Option<String>,
    pub file: Option<FileInputDto>,
    pub youtube: Option<YoutubeInputDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatedResourceDto {
    pub ok: bool,
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ResourceVoteDto {
    /// `up`, `down` or `clear`
    pub action: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VoteTallyDto {
    pub up: u64,
    pub down: u64,
    pub score: i64,
    pub user_vote: Option<String>,
}
