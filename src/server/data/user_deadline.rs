//! Per-user deadline copies.
//!
//! Every write here is one step of a fan-out. Services call these methods with an open
//! transaction so that the canonical row and all copies change together.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::deadline::{Deadline, DeadlineCopySource, UpdateDeadlineParam, UserDeadline};

pub struct UserDeadlineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserDeadlineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Copies a deadline into the lists of the given users.
    ///
    /// # Arguments
    /// - `deadline` - The canonical row just created
    /// - `source` - Course and creator details to denormalize
    /// - `user_ids` - Recipients; duplicates must already be removed
    ///
    /// # Returns
    /// - `Ok(())` - One copy written per recipient
    /// - `Err(DbErr)` - Database error; the caller's transaction rolls back
    pub async fn insert_copies(
        &self,
        deadline: &Deadline,
        source: &DeadlineCopySource,
        user_ids: &[i32],
    ) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let rows = user_ids.iter().map(|user_id| entity::user_deadline::ActiveModel {
            user_id: ActiveValue::Set(*user_id),
            deadline_id: ActiveValue::Set(deadline.id.clone()),
            course_id: ActiveValue::Set(deadline.course_id),
            course_code: ActiveValue::Set(source.course_code.clone()),
            course_name: ActiveValue::Set(source.course_name.clone()),
            section: ActiveValue::Set(deadline.section.clone()),
            kind: ActiveValue::Set(deadline.kind.as_str().to_string()),
            title: ActiveValue::Set(deadline.title.clone()),
            details: ActiveValue::Set(deadline.details.clone()),
            submission_link: ActiveValue::Set(deadline.submission_link.clone()),
            last_date: ActiveValue::Set(deadline.last_date),
            created_by_name: ActiveValue::Set(source.created_by_name.clone()),
            completed: ActiveValue::Set(false),
            completed_at: ActiveValue::Set(None),
        });

        entity::prelude::UserDeadline::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies an edit to every copy of a deadline. Completion state is left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of copies updated
    pub async fn update_copies(
        &self,
        deadline_id: &str,
        param: &UpdateDeadlineParam,
    ) -> Result<u64, DbErr> {
        let mut active = entity::user_deadline::ActiveModel::default();
        if let Some(title) = &param.title {
            active.title = ActiveValue::Set(title.clone());
        }
        if let Some(details) = &param.details {
            active.details = ActiveValue::Set(details.clone());
        }
        if let Some(link) = &param.submission_link {
            active.submission_link = ActiveValue::Set(link.clone());
        }
        if let Some(last_date) = param.last_date {
            active.last_date = ActiveValue::Set(last_date);
        }

        let result = entity::prelude::UserDeadline::update_many()
            .set(active)
            .filter(entity::user_deadline::Column::DeadlineId.eq(deadline_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every copy of a deadline.
    pub async fn delete_copies(&self, deadline_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::UserDeadline::delete_many()
            .filter(entity::user_deadline::Column::DeadlineId.eq(deadline_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find(&self, user_id: i32, deadline_id: &str) -> Result<Option<UserDeadline>, DbErr> {
        entity::prelude::UserDeadline::find_by_id((user_id, deadline_id.to_string()))
            .one(self.db)
            .await?
            .map(UserDeadline::from_entity)
            .transpose()
    }

    /// Sets the completion flag of the user's copy.
    ///
    /// # Returns
    /// - `Ok(true)` - The copy exists and was updated
    /// - `Ok(false)` - The user holds no copy of the deadline
    pub async fn set_completed(
        &self,
        user_id: i32,
        deadline_id: &str,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::UserDeadline::update_many()
            .set(entity::user_deadline::ActiveModel {
                completed: ActiveValue::Set(completed),
                completed_at: ActiveValue::Set(completed.then_some(now)),
                ..Default::default()
            })
            .filter(entity::user_deadline::Column::UserId.eq(user_id))
            .filter(entity::user_deadline::Column::DeadlineId.eq(deadline_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// The user's copies due at or after `now`: incomplete first, then by due date.
    pub async fn get_upcoming(&self, user_id: i32, now: DateTime<Utc>) -> Result<Vec<UserDeadline>, DbErr> {
        entity::prelude::UserDeadline::find()
            .filter(entity::user_deadline::Column::UserId.eq(user_id))
            .filter(entity::user_deadline::Column::LastDate.gte(now))
            .order_by_asc(entity::user_deadline::Column::Completed)
            .order_by_asc(entity::user_deadline::Column::LastDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserDeadline::from_entity)
            .collect()
    }

    /// Ids of the user's completed copies within a course.
    pub async fn completed_ids(&self, user_id: i32, course_id: i32) -> Result<HashSet<String>, DbErr> {
        let ids: Vec<String> = entity::prelude::UserDeadline::find()
            .select_only()
            .column(entity::user_deadline::Column::DeadlineId)
            .filter(entity::user_deadline::Column::UserId.eq(user_id))
            .filter(entity::user_deadline::Column::CourseId.eq(course_id))
            .filter(entity::user_deadline::Column::Completed.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }
}
