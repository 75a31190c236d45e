use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        mark::{CourseMarksDto, MarkEntryDto, UpsertMarkDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::mark::UpsertMarkParam,
        service::mark::MarkService, state::AppState,
    },
};

pub static MARK_TAG: &str = "mark";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkParams {
    pub course_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/user-marks",
    tag = MARK_TAG,
    params(("courseId" = i32, Query, description = "Course ID")),
    responses(
        (status = 200, description = "The caller's marks grouped by category", body = CourseMarksDto),
        (status = 400, description = "Missing course", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_marks(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MarkParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(course_id) = params.course_id else {
        return Err(AppError::BadRequest("courseId is required".to_string()));
    };

    let marks = MarkService::new(&state.db)
        .get_for_course(user.id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(marks.into_dto())))
}

/// Records a mark, replacing any earlier one for the same course, category and deadline.
///
/// # Returns
/// - `200 OK` - The stored mark
/// - `400 Bad Request` - Unknown type, `outOf` not positive, or negative `obtained`
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/user-marks",
    tag = MARK_TAG,
    request_body = UpsertMarkDto,
    responses(
        (status = 200, description = "Stored mark", body = MarkEntryDto),
        (status = 400, description = "Invalid mark", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn upsert_mark(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertMarkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpsertMarkParam::from_dto(payload)?;
    let mark = MarkService::new(&state.db).upsert(user.id, param).await?;

    Ok((StatusCode::OK, Json(mark.into_dto())))
}
