//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing registered users. It handles
//! registration upserts, lookups by every unique column, profile edits, club admin
//! promotion and the candidate query behind user search.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{
    NewUserParam, SearchTier, UpdateProfileParam, User, DEFAULT_THEME_COLOR,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes the identity columns of an existing one.
    ///
    /// Conflicts are resolved on `external_id`. The username chosen at first registration
    /// is kept; name, email, picture and student id are overwritten.
    ///
    /// # Arguments
    /// - `param` - Identity fields and student id
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error, including unique violations on other columns
    pub async fn upsert(&self, param: NewUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            external_id: ActiveValue::Set(param.external_id),
            name: ActiveValue::Set(param.name),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            student_id: ActiveValue::Set(param.student_id),
            picture_url: ActiveValue::Set(param.picture_url),
            theme_color: ActiveValue::Set(DEFAULT_THEME_COLOR.to_string()),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ExternalId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::Email,
                    entity::user::Column::StudentId,
                    entity::user::Column::PictureUrl,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Inserts a new user row. Fails on any unique violation.
    pub async fn create(&self, param: NewUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            external_id: ActiveValue::Set(param.external_id),
            name: ActiveValue::Set(param.name),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            student_id: ActiveValue::Set(param.student_id),
            picture_url: ActiveValue::Set(param.picture_url),
            theme_color: ActiveValue::Set(DEFAULT_THEME_COLOR.to_string()),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user registered for an identity provider account.
    ///
    /// # Arguments
    /// - `external_id` - Opaque provider id stored in the session
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The account is registered
    /// - `Ok(None)` - Authenticated but not yet registered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, DbErr> {
        self.find_by_column(entity::user::Column::ExternalId, external_id)
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        self.find_by_column(entity::user::Column::Username, username)
            .await
    }

    /// Finds a user by email. The lookup is lowercased to match stored values.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        self.find_by_column(entity::user::Column::Email, &email.trim().to_lowercase())
            .await
    }

    pub async fn find_by_student_id(&self, student_id: &str) -> Result<Option<User>, DbErr> {
        self.find_by_column(entity::user::Column::StudentId, student_id)
            .await
    }

    async fn find_by_column(
        &self,
        column: entity::user::Column,
        value: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(column.eq(value))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets the users with the given ids, ordered by name. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn update_picture(&self, id: i32, picture_url: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .set(entity::user::ActiveModel {
                picture_url: ActiveValue::Set(picture_url),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies a partial profile update.
    ///
    /// Only fields present in `param` are written; every other column keeps its value.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();

        fn set<T>(slot: &mut ActiveValue<T>, value: Option<T>)
        where
            T: Into<sea_orm::Value>,
        {
            if let Some(value) = value {
                *slot = ActiveValue::Set(value);
            }
        }

        fn set_opt<T>(slot: &mut ActiveValue<Option<T>>, value: Option<T>)
        where
            Option<T>: Into<sea_orm::Value>,
        {
            if let Some(value) = value {
                *slot = ActiveValue::Set(Some(value));
            }
        }

        let profile = param.profile;
        set(&mut active.name, param.name);
        set(&mut active.theme_color, param.theme_color);
        set_opt(&mut active.phone, profile.phone);
        set_opt(&mut active.bio, profile.bio);
        set_opt(&mut active.date_of_birth, profile.date_of_birth);
        set_opt(&mut active.blood_group, profile.blood_group);
        set_opt(&mut active.address, profile.address);
        set_opt(&mut active.department, profile.department);
        set_opt(&mut active.school, profile.school);
        set_opt(&mut active.college, profile.college);
        set_opt(&mut active.linkedin, profile.linkedin);
        set_opt(&mut active.github, profile.github);
        set_opt(&mut active.facebook, profile.facebook);
        set_opt(&mut active.instagram, profile.instagram);
        set_opt(&mut active.snapchat, profile.snapchat);
        set_opt(&mut active.twitter, profile.twitter);
        set_opt(&mut active.website, profile.website);
        set_opt(&mut active.youtube, profile.youtube);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Marks the user as the verified admin of a club.
    pub async fn set_club_admin(&self, id: i32, club_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .set(entity::user::ActiveModel {
                is_admin: ActiveValue::Set(true),
                admin_club_id: ActiveValue::Set(Some(club_id)),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Fetches users matching a search prefix at one ranking tier, ordered by name.
    ///
    /// Tiers are disjoint: a second-word match excludes users whose first word already
    /// matches, and a username match excludes both name tiers. SQLite `LIKE` is
    /// case-insensitive for ASCII, so no folding is needed here.
    ///
    /// # Arguments
    /// - `tier` - Which part of the user to match
    /// - `prefix` - Trimmed search text, matched literally
    /// - `exclude_email` - Email of a user to leave out (usually the searcher)
    /// - `limit` - Maximum number of users to return
    pub async fn search_tier(
        &self,
        tier: SearchTier,
        prefix: &str,
        exclude_email: Option<&str>,
        limit: u64,
    ) -> Result<Vec<User>, DbErr> {
        let pattern = format!("{}%", escape_like(prefix));

        let condition = match tier {
            SearchTier::FirstWord => first_word_matches(&pattern),
            SearchTier::SecondWord => Condition::all()
                .add(second_word_matches(&pattern))
                .add(first_word_matches(&pattern).not()),
            SearchTier::Username => Condition::all()
                .add(Expr::cust_with_values(
                    r#""username" LIKE ? ESCAPE '!'"#,
                    [pattern.clone()],
                ))
                .add(first_word_matches(&pattern).not())
                .add(second_word_matches(&pattern).not()),
        };

        let mut query = entity::prelude::User::find().filter(condition);

        if let Some(email) = exclude_email {
            query = query.filter(entity::user::Column::Email.ne(email.trim().to_lowercase()));
        }

        let entities = query
            .order_by_asc(entity::user::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}

fn first_word_matches(pattern: &str) -> Condition {
    Condition::all().add(Expr::cust_with_values(
        r#"ltrim("name") LIKE ? ESCAPE '!'"#,
        [pattern.to_string()],
    ))
}

/// The text after the first space of the trimmed name must start with the prefix.
fn second_word_matches(pattern: &str) -> Condition {
    Condition::all().add(Expr::cust_with_values(
        r#"instr(trim("name"), ' ') > 0 AND ltrim(substr(trim("name"), instr(trim("name"), ' ') + 1)) LIKE ? ESCAPE '!'"#,
        [pattern.to_string()],
    ))
}

/// Escapes `LIKE` wildcards with `!` so the prefix is matched literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push('!');
        }
        escaped.push(c);
    }
    escaped
}
