use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        study::{DismissInviteDto, StartStudySessionDto, StudyInviteDto, StudySessionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::study::{StartStudySessionParam, StudyInviteView},
        service::study::StudyService,
        state::AppState,
    },
};

pub static STUDY_TAG: &str = "study";

/// Opens a conference room and invites users to it.
///
/// The room slug defaults to `study-` plus six random base36 characters. Without an
/// explicit invitee list every accepted connection of the caller is invited.
///
/// # Returns
/// - `200 OK` - Room slug, meeting link and number of invites written
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/study-sessions/start",
    tag = STUDY_TAG,
    request_body = StartStudySessionDto,
    responses(
        (status = 200, description = "Study session started", body = StudySessionDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn start_session(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StartStudySessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let study = StudyService::new(&state.db, &state.settings.meet_room_prefix)
        .start(&user, StartStudySessionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(study.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/study-sessions/invites",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Active invites, newest first", body = Vec<StudyInviteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_invites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invites: Vec<StudyInviteDto> =
        StudyService::new(&state.db, &state.settings.meet_room_prefix)
            .get_invites(user.id)
            .await?
            .into_iter()
            .map(StudyInviteView::into_dto)
            .collect();

    Ok((StatusCode::OK, Json(invites)))
}

#[utoipa::path(
    post,
    path = "/api/study-sessions/dismiss",
    tag = STUDY_TAG,
    request_body = DismissInviteDto,
    responses(
        (status = 200, description = "Invite dismissed", body = MessageDto),
        (status = 404, description = "Invite not found", body = ErrorDto)
    ),
)]
pub async fn dismiss_invite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DismissInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    StudyService::new(&state.db, &state.settings.meet_room_prefix)
        .dismiss(user.id, payload.invite_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Invite dismissed"))))
}
