use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{auth::Identity, user::User},
};

/// Permission a registered user must hold for an operation.
pub enum Permission<'a> {
    /// Verified admin of any club.
    ClubAdmin,
    /// Email listed in the configured super admin emails (already lowercased).
    SuperAdmin(&'a [String]),
}

/// Resolves the session identity into a registered user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the provider identity stored at login.
    ///
    /// # Returns
    /// - `Ok(Identity)` - The visitor is authenticated
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    pub async fn identity(&self) -> Result<Identity, AppError> {
        AuthSession::new(self.session)
            .get_identity()
            .await?
            .ok_or_else(|| AuthError::UserNotInSession.into())
    }

    /// Requires a registered user holding every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AuthError::UserNotInSession)` - Not authenticated (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Authenticated but unregistered (404)
    /// - `Err(AuthError::AccessDenied)` - A permission is missing (403)
    pub async fn require(&self, permissions: &[Permission<'_>]) -> Result<User, AppError> {
        let identity = self.identity().await?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_external_id(&identity.external_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(identity.external_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ClubAdmin => {
                    if !user.is_admin || user.admin_club_id.is_none() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User is not a verified club admin".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SuperAdmin(emails) => {
                    if !is_super_admin(emails, &user.email) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User is not a super admin".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the registered user when there is one, without failing for anonymous or
    /// unregistered visitors.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(identity) = AuthSession::new(self.session).get_identity().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db)
            .find_by_external_id(&identity.external_id)
            .await?)
    }
}

pub fn is_super_admin(emails: &[String], email: &str) -> bool {
    let email = email.trim().to_lowercase();
    emails.iter().any(|admin| *admin == email)
}
