use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::club::{Club, CreateClubParam};

pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clubs ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        let clubs = entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await?;

        Ok(clubs.into_iter().map(Club::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Club>, DbErr> {
        let club = entity::prelude::Club::find_by_id(id).one(self.db).await?;

        Ok(club.map(Club::from_entity))
    }

    pub async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<Club>, DbErr> {
        let club = entity::prelude::Club::find()
            .filter(entity::club::Column::SecretKey.eq(secret_key))
            .one(self.db)
            .await?;

        Ok(club.map(Club::from_entity))
    }

    /// Whether another club already uses the name, admin email or secret key.
    pub async fn exists_conflict(&self, param: &CreateClubParam) -> Result<bool, DbErr> {
        let existing = entity::prelude::Club::find()
            .filter(
                Condition::any()
                    .add(entity::club::Column::Name.eq(param.name.as_str()))
                    .add(entity::club::Column::AdminEmail.eq(param.admin_email.as_str()))
                    .add(entity::club::Column::SecretKey.eq(param.secret_key.as_str())),
            )
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    pub async fn create(&self, param: CreateClubParam) -> Result<Club, DbErr> {
        let entity = entity::club::ActiveModel {
            name: ActiveValue::Set(param.name),
            admin_email: ActiveValue::Set(param.admin_email),
            secret_key: ActiveValue::Set(param.secret_key),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Club::from_entity(entity))
    }
}
