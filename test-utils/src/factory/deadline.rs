//! Deadline factory.
//!
//! Inserts the canonical deadline row only. Per-user copies are created with
//! [`create_user_copy`] so tests can control exactly who holds one.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DeadlineFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    section: String,
    created_by: i32,
    kind: String,
    title: String,
    last_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl<'a> DeadlineFactory<'a> {
    /// Defaults to a `theory` deadline due in 7 days, created now.
    pub fn new(db: &'a DatabaseConnection, course_id: i32, section: &str, created_by: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            course_id,
            section: section.to_string(),
            created_by,
            kind: "theory".to_string(),
            title: format!("Assignment {}", id),
            last_date: now + Duration::days(7),
            created_at: now,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn last_date(mut self, last_date: DateTime<Utc>) -> Self {
        self.last_date = last_date;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::deadline::Model, DbErr> {
        entity::deadline::ActiveModel {
            id: ActiveValue::Set(format!(
                "{}-test{:05}-factory",
                self.created_at.timestamp_millis(),
                next_id()
            )),
            course_id: ActiveValue::Set(self.course_id),
            section: ActiveValue::Set(self.section),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            details: ActiveValue::Set("Submit on time".to_string()),
            submission_link: ActiveValue::Set(None),
            last_date: ActiveValue::Set(self.last_date),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Copies a deadline into a user's list, as fan-out would.
pub async fn create_user_copy(
    db: &DatabaseConnection,
    user_id: i32,
    deadline: &entity::deadline::Model,
    course: &entity::course::Model,
) -> Result<entity::user_deadline::Model, DbErr> {
    entity::user_deadline::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        deadline_id: ActiveValue::Set(deadline.id.clone()),
        course_id: ActiveValue::Set(course.id),
        course_code: ActiveValue::Set(course.course_code.clone()),
        course_name: ActiveValue::Set(course.course_name.clone()),
        section: ActiveValue::Set(deadline.section.clone()),
        kind: ActiveValue::Set(deadline.kind.clone()),
        title: ActiveValue::Set(deadline.title.clone()),
        details: ActiveValue::Set(deadline.details.clone()),
        submission_link: ActiveValue::Set(deadline.submission_link.clone()),
        last_date: ActiveValue::Set(deadline.last_date),
        created_by_name: ActiveValue::Set("Factory".to_string()),
        completed: ActiveValue::Set(false),
        completed_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
