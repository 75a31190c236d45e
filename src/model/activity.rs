use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: i32,
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub metadata: Option<serde_json::Value>,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ActivityPaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActionCountDto {
    pub action: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActivityPageDto {
    pub activities: Vec<ActivityDto>,
    pub pagination: ActivityPaginationDto,
    pub counts: Vec<ActionCountDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActivityDetailsDto {
    pub title: Option<String>,
    pub description: Option<String>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityDto {
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    #[serde(default)]
    pub details: ActivityDetailsDto,
    pub visibility: Option<String>,
}
