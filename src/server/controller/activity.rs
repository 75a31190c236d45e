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
        activity::{ActivityDto, ActivityPageDto, CreateActivityDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::activity::{ActivityFilter, NewActivity},
        service::activity::{ActivityService, DEFAULT_ACTIVITY_LIMIT},
        state::AppState,
    },
};

pub static ACTIVITY_TAG: &str = "activity";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub action: Option<String>,
    pub resource_type: Option<String>,
}

/// The caller's activity feed, newest first.
///
/// `all` or an empty value disables the `action` and `resourceType` filters. Per-action
/// counts cover every entry of the caller regardless of filters.
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Entries per page, at most 100"),
        ("action" = Option<String>, Query, description = "Action filter"),
        ("resourceType" = Option<String>, Query, description = "Resource type filter")
    ),
    responses(
        (status = 200, description = "Page of activity entries", body = ActivityPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ActivityParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = ActivityFilter::from_query(params.action, params.resource_type);
    let page = ActivityService::new(&state.db)
        .get_page(
            user.id,
            filter,
            params.page.unwrap_or(1),
            params.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Entry stored", body = ActivityDto),
        (status = 400, description = "Missing title or unknown action", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let activity = ActivityService::new(&state.db)
        .create(user.id, NewActivity::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/activities/{id}",
    tag = ACTIVITY_TAG,
    params(("id" = i32, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Entry deleted", body = MessageDto),
        (status = 404, description = "Activity not found", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ActivityService::new(&state.db).delete(id, user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Activity deleted"))))
}
