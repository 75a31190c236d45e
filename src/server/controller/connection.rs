use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        connection::TargetUserDto,
        resource::DirectoryDto,
        user::UserCardDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{resource::DirectoryView, user::User},
        service::{connection::ConnectionService, directory::DirectoryService},
        state::AppState,
    },
};

pub static CONNECTION_TAG: &str = "connection";

/// Sends a connection request to another user.
///
/// A previously rejected request is reopened as pending. Requests that are already
/// pending or accepted are reported with a message rather than an error.
///
/// # Returns
/// - `200 OK` - Request sent, or already pending or connected
/// - `400 Bad Request` - Request to self
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Target user does not exist
#[utoipa::path(
    post,
    path = "/api/connections/request",
    tag = CONNECTION_TAG,
    request_body = TargetUserDto,
    responses(
        (status = 200, description = "Outcome of the request", body = MessageDto),
        (status = 400, description = "Cannot connect to yourself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn request_connection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TargetUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = ConnectionService::new(&state.db)
        .request(&user, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(outcome.message()))))
}

#[utoipa::path(
    post,
    path = "/api/connections/accept",
    tag = CONNECTION_TAG,
    request_body = TargetUserDto,
    responses(
        (status = 200, description = "Connection accepted", body = MessageDto),
        (status = 404, description = "No pending request from that user", body = ErrorDto)
    ),
)]
pub async fn accept_connection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TargetUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = ConnectionService::new(&state.db)
        .accept(&user, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(outcome.message()))))
}

#[utoipa::path(
    post,
    path = "/api/connections/reject",
    tag = CONNECTION_TAG,
    request_body = TargetUserDto,
    responses(
        (status = 200, description = "Request rejected", body = MessageDto),
        (status = 404, description = "No pending request from that user", body = ErrorDto)
    ),
)]
pub async fn reject_connection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TargetUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ConnectionService::new(&state.db)
        .reject(&user, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Connection request rejected"))))
}

/// Withdraws the caller's own pending request.
#[utoipa::path(
    post,
    path = "/api/connections/cancel",
    tag = CONNECTION_TAG,
    request_body = TargetUserDto,
    responses(
        (status = 200, description = "Request cancelled", body = MessageDto),
        (status = 409, description = "No pending request to cancel", body = ErrorDto)
    ),
)]
pub async fn cancel_connection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TargetUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ConnectionService::new(&state.db)
        .cancel(&user, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Connection request cancelled"))))
}

#[utoipa::path(
    post,
    path = "/api/connections/disconnect",
    tag = CONNECTION_TAG,
    request_body = TargetUserDto,
    responses(
        (status = 200, description = "Connection removed", body = MessageDto),
        (status = 400, description = "Not connected", body = ErrorDto)
    ),
)]
pub async fn disconnect(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TargetUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ConnectionService::new(&state.db)
        .disconnect(&user, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Connection removed"))))
}

#[utoipa::path(
    get,
    path = "/api/connections/requests",
    tag = CONNECTION_TAG,
    responses(
        (status = 200, description = "Users with pending requests to the caller", body = Vec<UserCardDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_incoming_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let senders: Vec<UserCardDto> = ConnectionService::new(&state.db)
        .get_incoming_requests(user.id)
        .await?
        .into_iter()
        .map(User::into_card_dto)
        .collect();

    Ok((StatusCode::OK, Json(senders)))
}

#[utoipa::path(
    get,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    responses(
        (status = 200, description = "Accepted connections", body = Vec<UserCardDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_connections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let connections: Vec<UserCardDto> = ConnectionService::new(&state.db)
        .get_connections(user.id)
        .await?
        .into_iter()
        .map(User::into_card_dto)
        .collect();

    Ok((StatusCode::OK, Json(connections)))
}

/// Directories owned by another user that the caller is allowed to see.
///
/// Public directories are always included; connection-scoped ones need an accepted
/// connection between the two users.
#[utoipa::path(
    get,
    path = "/api/connections/{user_id}/resource-directories",
    tag = CONNECTION_TAG,
    params(("user_id" = i32, Path, description = "Owner's user ID")),
    responses(
        (status = 200, description = "Visible directories", body = Vec<DirectoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_connection_directories(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let directories: Vec<DirectoryDto> = DirectoryService::new(&state.db)
        .get_visible_owned_by(user.id, user_id)
        .await?
        .into_iter()
        .map(DirectoryView::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(directories)))
}
