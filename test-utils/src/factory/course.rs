//! Course catalog factories: courses, sections and class schedules.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    course_code: String,
    course_name: String,
}

impl<'a> CourseFactory<'a> {
    /// Defaults to code `CSE{n}` and name `Course {n}`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            course_code: format!("CSE{}", id),
            course_name: format!("Course {}", id),
        }
    }

    pub fn course_code(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = course_code.into();
        self
    }

    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            course_code: ActiveValue::Set(self.course_code),
            course_name: ActiveValue::Set(self.course_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}

pub async fn create_section(
    db: &DatabaseConnection,
    course_id: i32,
    name: &str,
) -> Result<entity::course_section::Model, DbErr> {
    entity::course_section::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a `theory` or `lab` schedule to a section.
pub async fn create_schedule(
    db: &DatabaseConnection,
    section_id: i32,
    kind: &str,
) -> Result<entity::class_schedule::Model, DbErr> {
    entity::class_schedule::ActiveModel {
        section_id: ActiveValue::Set(section_id),
        kind: ActiveValue::Set(kind.to_string()),
        faculty: ActiveValue::Set("TBA".to_string()),
        details: ActiveValue::Set(String::new()),
        days: ActiveValue::Set("Sunday,Tuesday".to_string()),
        start_time: ActiveValue::Set("08:00".to_string()),
        end_time: ActiveValue::Set("09:20".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
