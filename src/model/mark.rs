use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MarkEntryDto {
    pub deadline_id: String,
    pub obtained: f64,
    pub out_of: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CourseMarksDto {
    pub course_id: i32,
    pub quiz: Vec<MarkEntryDto>,
    pub assignment: Vec<MarkEntryDto>,
    pub mid: Vec<MarkEntryDto>,
    #[serde(rename = "final")]
    pub final_exam: Vec<MarkEntryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpsertMarkDto {
    pub course_id: i32,
    #[serde(default)]
    pub deadline_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub obtained: f64,
    pub out_of: f64,
}
