use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, VoteDto},
        deadline::{
            CompletionDto, CreateDeadlineDto, DeadlineDto, FinishedDeadlinesDto,
            UpdateDeadlineDto, UserDeadlineDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            course::ClassKind,
            deadline::{CreateDeadlineParam, DeadlineView, UpdateDeadlineParam, UserDeadline},
            vote::VoteChoice,
        },
        service::deadline::DeadlineService,
        state::AppState,
    },
};

/// Tag for grouping deadline endpoints in OpenAPI documentation
pub static DEADLINE_TAG: &str = "deadline";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingParams {
    pub course_id: Option<i32>,
    pub section: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedParams {
    pub course_id: Option<i32>,
}

/// Create a deadline and copy it to every classmate.
///
/// Inserts the deadline and writes a copy into the list of every user enrolled in the
/// same course section, plus the creator, in one transaction.
///
/// # Access Control
/// - Registered user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Course, section, type, title, details, optional link and due date
///
/// # Returns
/// - `201 Created` - The new deadline with its creator and empty tally
/// - `400 Bad Request` - Missing field, unknown type, or a lab deadline for a section
///   without a lab
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Course or section does not exist
/// - `500 Internal Server Error` - Database error; no copy is written
#[utoipa::path(
    post,
    path = "/api/deadlines",
    tag = DEADLINE_TAG,
    request_body = CreateDeadlineDto,
    responses(
        (status = 201, description = "Deadline created", body = DeadlineDto),
        (status = 400, description = "Invalid deadline data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course or section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deadline(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDeadlineDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateDeadlineParam::from_dto(payload)?;
    let view = DeadlineService::new(&state.db).create(&user, param).await?;

    Ok((StatusCode::CREATED, Json(view.into_dto())))
}

/// Edit a deadline and all of its copies.
///
/// # Access Control
/// - Creator of the deadline, within 24 hours of creating it
///
/// # Returns
/// - `200 OK` - The updated deadline
/// - `403 Forbidden` - The edit window has closed
/// - `404 Not Found` - Unknown deadline or caller is not the creator
#[utoipa::path(
    patch,
    path = "/api/deadlines/{id}",
    tag = DEADLINE_TAG,
    params(("id" = String, Path, description = "Deadline ID")),
    request_body = UpdateDeadlineDto,
    responses(
        (status = 200, description = "Deadline updated", body = DeadlineDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 403, description = "Edit window closed", body = ErrorDto),
        (status = 404, description = "Deadline not found or not authorized", body = ErrorDto)
    ),
)]
pub async fn update_deadline(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDeadlineDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateDeadlineParam::from_dto(payload)?;
    let view = DeadlineService::new(&state.db)
        .update(&user, &id, param)
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Delete a deadline, its votes and every copy.
///
/// # Access Control
/// - Creator of the deadline, within 24 hours of creating it
#[utoipa::path(
    delete,
    path = "/api/deadlines/{id}",
    tag = DEADLINE_TAG,
    params(("id" = String, Path, description = "Deadline ID")),
    responses(
        (status = 200, description = "Deadline deleted", body = MessageDto),
        (status = 403, description = "Edit window closed", body = ErrorDto),
        (status = 404, description = "Deadline not found or not authorized", body = ErrorDto)
    ),
)]
pub async fn delete_deadline(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    DeadlineService::new(&state.db).delete(&user, &id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Deadline deleted"))))
}

/// Marks the caller's copy of a deadline complete or incomplete.
#[utoipa::path(
    patch,
    path = "/api/deadlines/{id}/completion",
    tag = DEADLINE_TAG,
    params(("id" = String, Path, description = "Deadline ID")),
    request_body = CompletionDto,
    responses(
        (status = 200, description = "Updated copy", body = UserDeadlineDto),
        (status = 404, description = "The caller has no copy of the deadline", body = ErrorDto)
    ),
)]
pub async fn set_completion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<CompletionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let copy = DeadlineService::new(&state.db)
        .set_completion(user.id, &id, payload.completed)
        .await?;

    Ok((StatusCode::OK, Json(copy.into_dto())))
}

/// Agree or disagree with a deadline.
///
/// Repeating the current vote clears it; voting the other way switches it.
#[utoipa::path(
    post,
    path = "/api/deadlines/{id}/vote",
    tag = DEADLINE_TAG,
    params(("id" = String, Path, description = "Deadline ID")),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Deadline with the new tally", body = DeadlineDto),
        (status = 400, description = "Invalid vote type", body = ErrorDto),
        (status = 404, description = "Deadline not found", body = ErrorDto)
    ),
)]
pub async fn vote_deadline(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let choice = VoteChoice::parse(&payload.vote_type)?;
    let view = DeadlineService::new(&state.db)
        .vote(user.id, &id, choice)
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Upcoming deadlines of a course section, soonest first.
///
/// # Returns
/// - `200 OK` - Deadlines with creator details and vote counts
/// - `400 Bad Request` - Missing course or section, or unknown type
#[utoipa::path(
    get,
    path = "/api/deadlines",
    tag = DEADLINE_TAG,
    params(
        ("courseId" = i32, Query, description = "Course ID"),
        ("section" = String, Query, description = "Section name"),
        ("type" = Option<String>, Query, description = "`theory` or `lab`")
    ),
    responses(
        (status = 200, description = "Upcoming deadlines", body = Vec<DeadlineDto>),
        (status = 400, description = "Invalid query", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_deadlines(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UpcomingParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (Some(course_id), Some(section)) = (params.course_id, params.section) else {
        return Err(AppError::BadRequest(
            "courseId and section are required".to_string(),
        ));
    };
    let kind = params
        .kind
        .filter(|kind| !kind.is_empty())
        .map(|kind| kind.parse::<ClassKind>())
        .transpose()
        .map_err(|_| AppError::BadRequest("Type must be theory or lab".to_string()))?;

    let deadlines: Vec<DeadlineDto> = DeadlineService::new(&state.db)
        .get_upcoming(user.id, course_id, &section, kind)
        .await?
        .into_iter()
        .map(DeadlineView::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(deadlines)))
}

#[utoipa::path(
    get,
    path = "/api/deadlines/mine",
    tag = DEADLINE_TAG,
    responses(
        (status = 200, description = "The caller's upcoming copies, incomplete first", body = Vec<UserDeadlineDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_my_deadlines(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let copies: Vec<UserDeadlineDto> = DeadlineService::new(&state.db)
        .get_mine(user.id)
        .await?
        .into_iter()
        .map(UserDeadline::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(copies)))
}

/// Past or completed deadlines of the caller's section, split by type.
#[utoipa::path(
    get,
    path = "/api/deadlines/finished",
    tag = DEADLINE_TAG,
    params(("courseId" = i32, Query, description = "Course ID")),
    responses(
        (status = 200, description = "Finished deadlines", body = FinishedDeadlinesDto),
        (status = 400, description = "Missing course", body = ErrorDto)
    ),
)]
pub async fn get_finished_deadlines(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FinishedParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(course_id) = params.course_id else {
        return Err(AppError::BadRequest("courseId is required".to_string()));
    };

    let finished = DeadlineService::new(&state.db)
        .get_finished(user.id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(finished.into_dto())))
}
