use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        upload::{SignedUploadDto, UploadRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::upload::{UploadPurpose, UploadRequest},
        service::storage::UploadService,
        state::AppState,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Signed upload slot for a study resource file.
///
/// Accepts PDF, Word, PowerPoint, plain text and common image types up to 10 MB.
#[utoipa::path(
    post,
    path = "/api/uploads/presign",
    tag = UPLOAD_TAG,
    request_body = UploadRequestDto,
    responses(
        (status = 200, description = "Signed upload", body = SignedUploadDto),
        (status = 400, description = "Type not allowed or size out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 502, description = "Storage rejected the request", body = ErrorDto)
    ),
)]
pub async fn presign_resource(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UploadRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    presign(state, session, UploadPurpose::Resource, payload).await
}

/// Signed upload slot for an event banner image, up to 5 MB.
#[utoipa::path(
    post,
    path = "/api/uploads/event-image",
    tag = UPLOAD_TAG,
    request_body = UploadRequestDto,
    responses(
        (status = 200, description = "Signed upload", body = SignedUploadDto),
        (status = 400, description = "Type not allowed or size out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 502, description = "Storage rejected the request", body = ErrorDto)
    ),
)]
pub async fn presign_event_image(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UploadRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    presign(state, session, UploadPurpose::EventImage, payload).await
}

async fn presign(
    state: AppState,
    session: Session,
    purpose: UploadPurpose,
    payload: UploadRequestDto,
) -> Result<(StatusCode, Json<SignedUploadDto>), AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let request = UploadRequest::from_dto(purpose, payload)?;
    let upload = UploadService::new(&state.http_client, &state.storage)
        .presign(user.id, request)
        .await?;

    Ok((StatusCode::OK, Json(upload.into_dto())))
}
