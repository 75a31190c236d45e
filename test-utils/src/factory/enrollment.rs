//! Enrollment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Enrolls a user in a course section.
pub async fn enroll(
    db: &DatabaseConnection,
    user_id: i32,
    course_id: i32,
    section: &str,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        course_id: ActiveValue::Set(course_id),
        section: ActiveValue::Set(section.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
