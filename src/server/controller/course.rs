use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, IdsDto},
        course::{CourseDto, EnrollmentDto, UpdateEnrollmentsDto, UpsertCourseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::course::{Course, Enrollment, SelectedCourse, UpsertCourseParam},
        service::course::CourseService,
        state::AppState,
    },
};

pub static COURSE_TAG: &str = "course";

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Every course with its sections", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses: Vec<CourseDto> = CourseService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Course::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(courses)))
}

#[utoipa::path(
    post,
    path = "/api/courses/by-ids",
    tag = COURSE_TAG,
    request_body = IdsDto,
    responses(
        (status = 200, description = "Courses that exist", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses_by_ids(
    State(state): State<AppState>,
    Json(payload): Json<IdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let courses: Vec<CourseDto> = CourseService::new(&state.db)
        .get_by_ids(&payload.ids)
        .await?
        .into_iter()
        .map(Course::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(courses)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Creates or replaces a catalog entry by course code.
///
/// Sections and their schedules are replaced wholesale in one transaction.
///
/// # Access Control
/// - `SuperAdmin` - Only emails listed in `SUPER_ADMIN_EMAILS`
///
/// # Returns
/// - `200 OK` - The stored course
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a super admin
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = UpsertCourseDto,
    responses(
        (status = 200, description = "Stored course", body = CourseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a super admin", body = ErrorDto)
    ),
)]
pub async fn upsert_course(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin(&state.settings.super_admin_emails)])
        .await?;

    let course = CourseService::new(&state.db)
        .upsert(UpsertCourseParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/user-courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Current enrollments", body = Vec<EnrollmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let enrollments: Vec<EnrollmentDto> = CourseService::new(&state.db)
        .get_enrollments(user.id)
        .await?
        .into_iter()
        .map(Enrollment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(enrollments)))
}

/// Replaces the caller's enrollments with the selected course sections.
///
/// # Returns
/// - `200 OK` - Enrollments after the change
/// - `404 Not Found` - Unknown course or section
#[utoipa::path(
    put,
    path = "/api/user-courses",
    tag = COURSE_TAG,
    request_body = UpdateEnrollmentsDto,
    responses(
        (status = 200, description = "Enrollments after the change", body = Vec<EnrollmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course or section not found", body = ErrorDto)
    ),
)]
pub async fn set_enrollments(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateEnrollmentsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let selected = payload
        .selected_courses
        .into_iter()
        .map(SelectedCourse::from_dto)
        .collect();

    let enrollments: Vec<EnrollmentDto> = CourseService::new(&state.db)
        .set_enrollments(user.id, selected)
        .await?
        .into_iter()
        .map(Enrollment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(enrollments)))
}
