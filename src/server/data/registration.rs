use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    event::{Registrant, Registration, RegistrationStatus},
    user::DEFAULT_PICTURE_URL,
};

/// Event registrations. A registration is never deleted; cancelling flips its status.
pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, event_id: i32, user_id: i32) -> Result<Option<Registration>, DbErr> {
        entity::prelude::EventRegistration::find_by_id((event_id, user_id))
            .one(self.db)
            .await?
            .map(Registration::from_entity)
            .transpose()
    }

    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Registration, DbErr> {
        let entity = entity::event_registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(RegistrationStatus::Registered.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Registration::from_entity(entity)
    }

    pub async fn set_status(
        &self,
        event_id: i32,
        user_id: i32,
        status: RegistrationStatus,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::EventRegistration::update_many()
            .set(entity::event_registration::ActiveModel {
                status: ActiveValue::Set(status.as_str().to_string()),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Active registrants of an event with their contact details, newest first.
    pub async fn get_registrants(&self, event_id: i32) -> Result<Vec<Registrant>, DbErr> {
        let rows = entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(
                entity::event_registration::Column::Status
                    .eq(RegistrationStatus::Registered.as_str()),
            )
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::event_registration::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(registration, user)| {
                user.map(|user| Registrant {
                    user_id: user.id,
                    name: user.name,
                    email: user.email,
                    student_id: user.student_id,
                    picture_url: if user.picture_url.is_empty() {
                        DEFAULT_PICTURE_URL.to_string()
                    } else {
                        user.picture_url
                    },
                    registered_at: registration.created_at,
                })
            })
            .collect())
    }

    /// The user's active registrations.
    pub async fn get_active_for_user(&self, user_id: i32) -> Result<Vec<Registration>, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .filter(
                entity::event_registration::Column::Status
                    .eq(RegistrationStatus::Registered.as_str()),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(Registration::from_entity)
            .collect()
    }
}
