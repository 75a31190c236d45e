use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::AuthStatusDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        model::{auth::Identity, user::User},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Redirects to the identity provider's authorize URL.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.settings.userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the OAuth code flow.
///
/// Validates the CSRF token, exchanges the code, fetches the identity and stores it in
/// the session. The response tells the client whether a registered user already exists
/// for the identity.
///
/// # Returns
/// - `200 OK` - Identity stored in the session
/// - `400 Bad Request` - CSRF mismatch or rejected authorization code
/// - `500 Internal Server Error` - Provider or database failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF token issued at login"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Logged in", body = AuthStatusDto),
        (status = 400, description = "CSRF validation or code exchange failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.settings.userinfo_url,
    );
    let identity = auth_service.callback(params.code).await?;

    AuthSession::new(&session).set_identity(&identity).await?;

    let user = UserService::new(&state.db)
        .find_by_external_id(&identity.external_id)
        .await?;

    Ok((StatusCode::OK, Json(auth_status(identity, user))))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Returns the session identity and, when registered, the user row.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current identity", body = AuthStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let identity = guard.identity().await?;
    let user = guard.optional().await?;

    Ok((StatusCode::OK, Json(auth_status(identity, user))))
}

fn auth_status(identity: Identity, user: Option<User>) -> AuthStatusDto {
    AuthStatusDto {
        identity: identity.into_dto(),
        registered: user.is_some(),
        user: user.map(User::into_dto),
    }
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
