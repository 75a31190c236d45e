use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClassScheduleDto {
    pub faculty: String,
    pub details: String,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SectionDto {
    pub name: String,
    pub theory: Option<ClassScheduleDto>,
    pub lab: Option<ClassScheduleDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub link: Option<String>,
    pub exam_day: Option<String>,
    pub sections: Vec<SectionDto>,
}

/// Catalog upsert keyed by course code. Sections are replaced wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpsertCourseDto {
    pub course_code: String,
    pub course_name: String,
    pub link: Option<String>,
    pub exam_day: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub course_id: i32,
    pub course_code: String,
    pub course_name: String,
    pub section: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SelectedCourseDto {
    pub course_id: i32,
    pub section: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnrollmentsDto {
    pub selected_courses: Vec<SelectedCourseDto>,
}
