//! User factory for creating registered test users.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for registered users with unique identity fields.
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .name("Alice Rahman")
///     .email("alice@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: String,
    name: String,
    username: String,
    email: String,
    student_id: String,
    picture_url: String,
    is_admin: bool,
    admin_club_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Defaults derive every unique column from a shared counter:
    /// `ext-{n}`, `User {n}`, `user{n}`, `user{n}@example.com` and student id `2000000{n}`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            external_id: format!("ext-{}", id),
            name: format!("User {}", id),
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            student_id: format!("2000000{}", id),
            picture_url: String::new(),
            is_admin: false,
            admin_club_id: None,
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = student_id.into();
        self
    }

    pub fn picture_url(mut self, picture_url: impl Into<String>) -> Self {
        self.picture_url = picture_url.into();
        self
    }

    /// Marks the user as the verified admin of `club_id`.
    pub fn club_admin(mut self, club_id: i32) -> Self {
        self.is_admin = true;
        self.admin_club_id = Some(club_id);
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            name: ActiveValue::Set(self.name),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            student_id: ActiveValue::Set(self.student_id),
            picture_url: ActiveValue::Set(self.picture_url),
            theme_color: ActiveValue::Set("blue".to_string()),
            is_admin: ActiveValue::Set(self.is_admin),
            admin_club_id: ActiveValue::Set(self.admin_club_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given display name.
pub async fn create_user_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).name(name).build().await
}
