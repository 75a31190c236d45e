//! User service: registration, profiles, interests and search.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{connection::ConnectionRepository, interest::InterestRepository, user::UserRepository},
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        auth::Identity,
        connection::ConnectionStatus,
        user::{
            CheckUserParam, CreateUserParam, NewUserParam, Profile, SearchTier,
            UpdateProfileParam, User, ViewerRelation,
        },
    },
    service::activity::ActivityService,
    util::{
        text::{normalize_interests, random_base36, username_from_email},
        validate::{check_email, check_name, check_student_id, check_username},
    },
};

pub const MAX_LOOKUP_IDS: usize = 100;
pub const SEARCH_LIMIT: usize = 10;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_external_id(external_id)
            .await?)
    }

    /// Creates or refreshes the user row of the logged in identity.
    ///
    /// The username is derived from the email local part on first registration; a random
    /// suffix is appended when another user already holds it.
    ///
    /// # Arguments
    /// - `identity` - Session identity supplying name, email and picture
    /// - `student_id` - Student id submitted by the client
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::BadRequest)` - Student id missing, malformed or held by someone else
    pub async fn register_student(
        &self,
        identity: &Identity,
        student_id: Option<String>,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let student_id = student_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("Student ID is required".to_string()))?;
        check_student_id(&student_id).map_err(bad_request)?;

        if let Some(holder) = user_repo.find_by_student_id(&student_id).await? {
            if holder.external_id != identity.external_id {
                return Err(AppError::BadRequest("Student ID already exists".to_string()));
            }
        }

        let email = identity.email.trim().to_lowercase();
        let existing = user_repo.find_by_external_id(&identity.external_id).await?;
        let username = match existing {
            Some(user) => user.username,
            None => self.available_username(&username_from_email(&email)).await?,
        };

        let user = user_repo
            .upsert(NewUserParam {
                external_id: identity.external_id.clone(),
                name: identity.name.clone(),
                username,
                email,
                student_id,
                picture_url: identity.picture.clone().unwrap_or_default(),
            })
            .await?;

        Ok(user)
    }

    async fn available_username(&self, base: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);
        let base = if base.is_empty() { "student" } else { base };

        let mut candidate = base.to_string();
        while user_repo.find_by_username(&candidate).await?.is_some() {
            candidate = format!("{}_{}", base, random_base36(4));
        }

        Ok(candidate)
    }

    /// Validates format and availability of the submitted registration fields.
    ///
    /// # Returns
    /// - `Ok(())` - Every present field is valid and unused
    /// - `Err(AppError::BadRequest)` - The first failing check's message
    pub async fn check(&self, param: &CheckUserParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(username) = &param.username {
            check_username(username).map_err(bad_request)?;
            if user_repo.find_by_username(username).await?.is_some() {
                return Err(AppError::BadRequest("Username already taken".to_string()));
            }
        }

        if let Some(email) = &param.email {
            check_email(email).map_err(bad_request)?;
            if user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::BadRequest("Email already registered".to_string()));
            }
        }

        if let Some(student_id) = &param.student_id {
            check_student_id(student_id).map_err(bad_request)?;
            if user_repo.find_by_student_id(student_id).await?.is_some() {
                return Err(AppError::BadRequest("Student ID already exists".to_string()));
            }
        }

        Ok(())
    }

    /// Registers the identity with explicitly chosen fields.
    ///
    /// # Returns
    /// - `Ok(User)` - The new user
    /// - `Err(AppError::BadRequest)` - Invalid field, taken field, or the identity is
    ///   already registered
    pub async fn create(&self, identity: &Identity, param: CreateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        check_name(&param.name).map_err(bad_request)?;
        if user_repo
            .find_by_external_id(&identity.external_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let email = param.email.to_lowercase();
        self.check(&CheckUserParam {
            username: Some(param.username.clone()),
            email: Some(email.clone()),
            student_id: Some(param.student_id.clone()),
        })
        .await?;

        let user = user_repo
            .create(NewUserParam {
                external_id: identity.external_id.clone(),
                name: param.name,
                username: param.username,
                email,
                student_id: param.student_id,
                picture_url: param
                    .picture_url
                    .or_else(|| identity.picture.clone())
                    .unwrap_or_default(),
            })
            .await?;

        Ok(user)
    }

    /// Looks up users by id, skipping unknown ids.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - More than 100 ids requested
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, AppError> {
        if ids.len() > MAX_LOOKUP_IDS {
            return Err(AppError::BadRequest(format!(
                "At most {} ids can be requested",
                MAX_LOOKUP_IDS
            )));
        }

        Ok(UserRepository::new(self.db).find_by_ids(ids).await?)
    }

    /// Replaces the stored picture with the one from the identity provider.
    pub async fn update_image(&self, user: &User, identity: &Identity) -> Result<User, AppError> {
        let picture_url = identity.picture.clone().unwrap_or_default();
        UserRepository::new(self.db)
            .update_picture(user.id, picture_url.clone())
            .await?;

        Ok(User {
            picture_url,
            ..user.clone()
        })
    }

    pub async fn get_interests(&self, user_id: i32) -> Result<Vec<String>, AppError> {
        Ok(InterestRepository::new(self.db).get(user_id).await?)
    }

    /// Normalizes and stores the user's interests, returning the stored list.
    pub async fn set_interests(
        &self,
        user_id: i32,
        interests: Vec<String>,
    ) -> Result<Vec<String>, AppError> {
        let interests = normalize_interests(interests);
        InterestRepository::new(self.db)
            .replace(user_id, &interests)
            .await?;

        ActivityService::new(self.db)
            .log(
                user_id,
                NewActivity::new(ActivityAction::InterestsUpdated, "Updated interests")
                    .resource(ActivityResourceType::Profile, user_id)
                    .metadata(serde_json::json!({ "interests": interests })),
            )
            .await;

        Ok(interests)
    }

    /// Gets a profile by username, with the viewer's connection state when present.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No user with that username
    pub async fn get_profile(&self, username: &str, viewer: Option<&User>) -> Result<Profile, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let interests = InterestRepository::new(self.db).get(user.id).await?;

        let viewer = match viewer {
            Some(viewer) => {
                let connection_repo = ConnectionRepository::new(self.db);
                let is_connected = connection_repo.is_connected(viewer.id, user.id).await?;
                let has_sent_request = connection_repo
                    .find_edge(viewer.id, user.id)
                    .await?
                    .is_some_and(|edge| edge.status == ConnectionStatus::Pending);

                Some(ViewerRelation {
                    is_connected,
                    has_sent_request,
                })
            }
            None => None,
        };

        Ok(Profile {
            user,
            interests,
            viewer,
        })
    }

    pub async fn username_by_student_id(&self, student_id: &str) -> Result<String, AppError> {
        UserRepository::new(self.db)
            .find_by_student_id(student_id.trim())
            .await?
            .map(|user| user.username)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial profile update and logs it.
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        if param.name.as_deref().is_some_and(|name| check_name(name).is_err()) {
            return Err(AppError::BadRequest("Name must be at least 2 characters".to_string()));
        }

        let Some(user) = UserRepository::new(self.db)
            .update_profile(user_id, param)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        ActivityService::new(self.db)
            .log(
                user_id,
                NewActivity::new(ActivityAction::ProfileUpdated, "Updated profile")
                    .resource(ActivityResourceType::Profile, user_id),
            )
            .await;

        Ok(user)
    }

    /// Prefix search over names and usernames.
    ///
    /// Matches on the first word of the name rank before matches on the second word,
    /// which rank before username matches. Within a tier users are ordered by name.
    /// Each tier is queried only for the slots the earlier tiers left open.
    ///
    /// # Arguments
    /// - `query` - Search text; blank is rejected
    /// - `exclude_email` - Usually the searcher's own email; must be well formed if given
    pub async fn search(
        &self,
        query: Option<&str>,
        exclude_email: Option<&str>,
    ) -> Result<Vec<User>, AppError> {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        let exclude_email = exclude_email
            .map(str::trim)
            .filter(|email| !email.is_empty());
        if let Some(email) = exclude_email {
            check_email(email).map_err(bad_request)?;
        }

        let repo = UserRepository::new(self.db);
        let mut found: Vec<User> = Vec::with_capacity(SEARCH_LIMIT);
        for tier in SearchTier::ALL {
            let remaining = SEARCH_LIMIT.saturating_sub(found.len());
            if remaining == 0 {
                break;
            }
            found.extend(
                repo.search_tier(tier, query, exclude_email, remaining as u64)
                    .await?,
            );
        }

        Ok(found)
    }
}

fn bad_request(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
