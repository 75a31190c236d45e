//! Event factory.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    created_by: i32,
    title: String,
    date: NaiveDate,
    time: String,
    tags: Vec<String>,
}

impl<'a> EventFactory<'a> {
    /// Defaults to an event 3 days from today at `18:00` with no tags.
    pub fn new(db: &'a DatabaseConnection, club_id: i32, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            created_by,
            title: format!("Event {}", id),
            date: (Utc::now() + Duration::days(3)).date_naive(),
            time: "18:00".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        let event = entity::event::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            created_by: ActiveValue::Set(self.created_by),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Come along".to_string()),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            location: ActiveValue::Set("Auditorium".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for tag in self.tags {
            entity::event_tag::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                tag: ActiveValue::Set(tag),
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

pub async fn create_event(
    db: &DatabaseConnection,
    club_id: i32,
    created_by: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, club_id, created_by).build().await
}

/// Inserts a registration with the given status.
pub async fn create_registration(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    status: &str,
) -> Result<entity::event_registration::Model, DbErr> {
    let now = Utc::now();
    entity::event_registration::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
