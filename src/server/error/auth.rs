use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The session holds no identity. 401.
    #[error("No authenticated identity in session")]
    UserNotInSession,

    /// The session identity has no registered user row. 404 `User not found`.
    #[error("No registered user for external id {0}")]
    UserNotInDatabase(String),

    /// The user lacks a required permission. 403.
    ///
    /// # Fields
    /// - User id
    /// - Reason, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state in the OAuth callback does not match the session. 400.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code with the identity provider failed. 400.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UserNotInSession => StatusCode::UNAUTHORIZED,
            Self::UserNotInDatabase(_) => StatusCode::NOT_FOUND,
            Self::AccessDenied(..) => StatusCode::FORBIDDEN,
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Maps authentication errors to generic client messages; details are logged at debug.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession => "Unauthorized",
            Self::UserNotInDatabase(_) => "User not found",
            Self::AccessDenied(..) => "Access denied",
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => {
                "There was an issue logging you in, please try again."
            }
        };

        (
            self.status(),
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
