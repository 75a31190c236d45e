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
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            review::{CreateReviewParam, Review},
            vote::VoteChoice,
        },
        service::review::ReviewService,
        state::AppState,
    },
};

pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewParams {
    pub course_id: Option<i32>,
}

/// Reviews of a course, newest first, with author names and vote counts.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(("courseId" = i32, Query, description = "Course ID")),
    responses(
        (status = 200, description = "Reviews of the course", body = Vec<ReviewDto>),
        (status = 400, description = "Missing course", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ReviewParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let Some(course_id) = params.course_id else {
        return Err(AppError::BadRequest("courseId is required".to_string()));
    };

    let reviews: Vec<ReviewDto> = ReviewService::new(&state.db)
        .get_for_course(course_id, viewer.map(|user| user.id))
        .await?
        .into_iter()
        .map(Review::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(reviews)))
}

/// Posts a review of a course. Each user can review a course once.
///
/// # Returns
/// - `201 Created` - The new review
/// - `400 Bad Request` - Rating outside 1 to 5, or empty or overlong text
/// - `404 Not Found` - Unknown course
/// - `409 Conflict` - The caller already reviewed the course
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review posted", body = ReviewDto),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Course already reviewed", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .create(&user, CreateReviewParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReviewService::new(&state.db).delete(user.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Review deleted"))))
}

#[utoipa::path(
    post,
    path = "/api/reviews/{id}/vote",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = MessageDto),
        (status = 400, description = "Invalid vote type", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn vote_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let choice = VoteChoice::parse(&payload.vote_type)?;
    ReviewService::new(&state.db).vote(user.id, id, choice).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Vote recorded"))))
}
