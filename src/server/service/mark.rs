use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::mark::MarkRepository,
    error::AppError,
    model::mark::{CourseMarks, Mark, UpsertMarkParam},
};

/// Marks a user records against their own deadlines.
pub struct MarkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_course(&self, user_id: i32, course_id: i32) -> Result<CourseMarks, AppError> {
        let marks = MarkRepository::new(self.db)
            .get_for_course(user_id, course_id)
            .await?;

        Ok(CourseMarks { course_id, marks })
    }

    /// Stores or replaces a mark.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The deadline id is blank
    pub async fn upsert(&self, user_id: i32, param: UpsertMarkParam) -> Result<Mark, AppError> {
        if param.deadline_id.is_empty() {
            return Err(AppError::BadRequest("deadlineId is required".to_string()));
        }

        Ok(MarkRepository::new(self.db)
            .upsert(user_id, &param, Utc::now())
            .await?)
    }
}
