use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub course_id: i32,
    pub user_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
    pub agree_count: u64,
    pub disagree_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub course_id: i32,
    pub rating: i32,
    pub review_text: String,
}
