use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::course::{Enrollment, SelectedCourse};

/// Course enrollments: one section per user per course.
pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user's enrollments with course code and name, ordered by course code.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Enrollment>, DbErr> {
        let rows = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Course)
            .order_by_asc(entity::course::Column::CourseCode)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, course)| {
                course.map(|course| Enrollment {
                    course_id: course.id,
                    course_code: course.course_code,
                    course_name: course.course_name,
                    section: enrollment.section,
                })
            })
            .collect())
    }

    /// Section the user is enrolled in for a course, if any.
    pub async fn find_section(&self, user_id: i32, course_id: i32) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::Enrollment::find_by_id((user_id, course_id))
            .one(self.db)
            .await?;

        Ok(row.map(|enrollment| enrollment.section))
    }

    /// Replaces every enrollment of a user with the given selection.
    ///
    /// # Arguments
    /// - `user_id` - Enrolled user
    /// - `selected` - Validated course/section pairs, one per course
    pub async fn replace(&self, user_id: i32, selected: &[SelectedCourse]) -> Result<(), DbErr> {
        entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if selected.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let rows = selected.iter().map(|selection| entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(selection.course_id),
            section: ActiveValue::Set(selection.section.clone()),
            created_at: ActiveValue::Set(now),
        });

        entity::prelude::Enrollment::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Ids of every user enrolled in the given course section.
    pub async fn user_ids_in_section(&self, course_id: i32, section: &str) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .filter(entity::enrollment::Column::Section.eq(section))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }
}
