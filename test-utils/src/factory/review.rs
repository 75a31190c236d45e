//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_review(
    db: &DatabaseConnection,
    course_id: i32,
    user_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        user_id: ActiveValue::Set(user_id),
        rating: ActiveValue::Set(rating),
        review_text: ActiveValue::Set("Solid course".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
