use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::mark::{Mark, UpsertMarkParam};

/// Marks a user recorded against their own deadlines.
pub struct MarkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's marks for a course, oldest update first.
    pub async fn get_for_course(&self, user_id: i32, course_id: i32) -> Result<Vec<Mark>, DbErr> {
        entity::prelude::Mark::find()
            .filter(entity::mark::Column::UserId.eq(user_id))
            .filter(entity::mark::Column::CourseId.eq(course_id))
            .order_by_asc(entity::mark::Column::UpdatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Mark::from_entity)
            .collect()
    }

    /// Stores a mark, replacing any previous score for the same deadline and category.
    pub async fn upsert(
        &self,
        user_id: i32,
        param: &UpsertMarkParam,
        now: DateTime<Utc>,
    ) -> Result<Mark, DbErr> {
        let entity = entity::prelude::Mark::insert(entity::mark::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(param.course_id),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            deadline_id: ActiveValue::Set(param.deadline_id.clone()),
            obtained: ActiveValue::Set(param.obtained),
            out_of: ActiveValue::Set(param.out_of),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::mark::Column::UserId,
                entity::mark::Column::CourseId,
                entity::mark::Column::Category,
                entity::mark::Column::DeadlineId,
            ])
            .update_columns([
                entity::mark::Column::Obtained,
                entity::mark::Column::OutOf,
                entity::mark::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Mark::from_entity(entity)
    }
}
