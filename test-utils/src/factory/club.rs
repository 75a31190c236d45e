//! Club factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    admin_email: String,
    secret_key: String,
}

impl<'a> ClubFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Club {}", id),
            admin_email: format!("club{}@example.com", id),
            secret_key: format!("secret-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn admin_email(mut self, admin_email: impl Into<String>) -> Self {
        self.admin_email = admin_email.into();
        self
    }

    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = secret_key.into();
        self
    }

    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            admin_email: ActiveValue::Set(self.admin_email),
            secret_key: ActiveValue::Set(self.secret_key),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
