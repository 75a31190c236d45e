//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys relevant to
//! its concern:
//! - `AuthSession` - the identity returned by the provider after login
//! - `CsrfSession` - the CSRF token for the OAuth code flow

use tower_sessions::Session;

use crate::server::{error::AppError, model::auth::Identity};

const SESSION_AUTH_IDENTITY: &str = "auth:identity";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// The session stores the provider identity rather than a user id because a visitor can
/// be authenticated before they have registered a user row.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the identity after a successful callback.
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_IDENTITY, identity).await?;
        Ok(())
    }

    /// Retrieves the identity of the logged in visitor.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - Visitor is authenticated
    /// - `Ok(None)` - Nobody is logged in
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_identity(&self) -> Result<Option<Identity>, AppError> {
        Ok(self.session.get::<Identity>(SESSION_AUTH_IDENTITY).await?)
    }

    /// Removes all data from the session and deletes it from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF token storage for the OAuth flow.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token validates at most once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
