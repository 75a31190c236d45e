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
        api::{ErrorDto, MessageDto},
        resource::{
            CourseResourcesDto, CreateResourceDto, CreatedResourceDto, ResourceDto,
            ResourcePageDto, ResourceVoteDto, VoteTallyDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            resource::{CourseResources, NewResourceParam, ResourceView, Visibility},
            vote::ResourceVoteAction,
        },
        service::{
            resource::{ResourceService, BY_COURSE_DEFAULT_LIMIT},
            storage::StorageClient,
        },
        state::AppState,
    },
};

pub static RESOURCE_TAG: &str = "resource";

#[derive(Deserialize)]
pub struct CourseResourceParams {
    pub q: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Public resources grouped by course, with a count per course.
#[utoipa::path(
    get,
    path = "/api/public-resources",
    tag = RESOURCE_TAG,
    responses(
        (status = 200, description = "Public resources by course", body = Vec<CourseResourcesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_resources(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let groups: Vec<CourseResourcesDto> = ResourceService::new(&state.db)
        .get_public_grouped(viewer.map(|user| user.id))
        .await?
        .into_iter()
        .map(CourseResources::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// Shares a file or video link with everyone.
///
/// A file needs `file.url`, usually the public URL of a presigned upload. A YouTube
/// resource needs a link a video ID can be read from.
///
/// # Returns
/// - `201 Created` - `{ok, id}` of the new resource
/// - `400 Bad Request` - Missing field, bad link, or a main directory with subdirectories
/// - `404 Not Found` - Directory does not exist or is not public
#[utoipa::path(
    post,
    path = "/api/public-resources",
    tag = RESOURCE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Resource created", body = CreatedResourceDto),
        (status = 400, description = "Invalid resource", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn create_public_resource(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, session, payload, Visibility::Public).await
}

#[utoipa::path(
    delete,
    path = "/api/public-resources/{id}",
    tag = RESOURCE_TAG,
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource deleted", body = MessageDto),
        (status = 403, description = "owner_mismatch", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn delete_public_resource(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(state, session, id).await
}

/// Resources of a public directory, most upvoted first, up to 50.
#[utoipa::path(
    get,
    path = "/api/public-resources/by-directory/{id}",
    tag = RESOURCE_TAG,
    params(("id" = i32, Path, description = "Directory ID")),
    responses(
        (status = 200, description = "Resources with vote tallies", body = Vec<ResourceDto>),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn get_public_by_directory(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let resources: Vec<ResourceDto> = ResourceService::new(&state.db)
        .get_public_by_directory(id, viewer.map(|user| user.id))
        .await?
        .into_iter()
        .map(ResourceView::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(resources)))
}

#[utoipa::path(
    get,
    path = "/api/public-resources/by-course/{course_code}",
    tag = RESOURCE_TAG,
    params(
        ("course_code" = String, Path, description = "Course code"),
        ("q" = Option<String>, Query, description = "Title or description filter"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Resources per page")
    ),
    responses(
        (status = 200, description = "Page of the course's public resources", body = ResourcePageDto)
    ),
)]
pub async fn get_public_by_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_code): Path<String>,
    Query(params): Query<CourseResourceParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;
    let q = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());

    let page = ResourceService::new(&state.db)
        .get_public_by_course(
            &course_code,
            q,
            params.page.unwrap_or(1),
            params.limit.unwrap_or(BY_COURSE_DEFAULT_LIMIT),
            viewer.map(|user| user.id),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/private-resources",
    tag = RESOURCE_TAG,
    responses(
        (status = 200, description = "The caller's private uploads", body = Vec<ResourceDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_private_resources(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let resources: Vec<ResourceDto> = ResourceService::new(&state.db)
        .get_private(user.id)
        .await?
        .into_iter()
        .map(ResourceView::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(resources)))
}

/// Stores a private upload. Inside one of the caller's directories the resource takes
/// on that directory's visibility.
#[utoipa::path(
    post,
    path = "/api/private-resources",
    tag = RESOURCE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Resource created", body = CreatedResourceDto),
        (status = 400, description = "Invalid resource", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn create_private_resource(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    create(state, session, payload, Visibility::Private).await
}

#[utoipa::path(
    delete,
    path = "/api/private-resources/{id}",
    tag = RESOURCE_TAG,
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource deleted", body = MessageDto),
        (status = 403, description = "owner_mismatch", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn delete_private_resource(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    delete(state, session, id).await
}

/// Resources of a user directory the caller owns or may see, newest first.
#[utoipa::path(
    get,
    path = "/api/private-resources/by-directory/{id}",
    tag = RESOURCE_TAG,
    params(("id" = i32, Path, description = "Directory ID")),
    responses(
        (status = 200, description = "Resources in the directory", body = Vec<ResourceDto>),
        (status = 404, description = "Directory not found or not visible", body = ErrorDto)
    ),
)]
pub async fn get_private_by_directory(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let resources: Vec<ResourceDto> = ResourceService::new(&state.db)
        .get_private_by_directory(id, user.id)
        .await?
        .into_iter()
        .map(ResourceView::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(resources)))
}

/// Upvotes, downvotes or clears the caller's vote on a resource they can see.
///
/// # Returns
/// - `200 OK` - Tally after the vote
/// - `400 Bad Request` - Action is not `up`, `down` or `clear`
/// - `404 Not Found` - Resource missing or not visible to the caller
#[utoipa::path(
    post,
    path = "/api/resources/{id}/vote",
    tag = RESOURCE_TAG,
    params(("id" = i32, Path, description = "Resource ID")),
    request_body = ResourceVoteDto,
    responses(
        (status = 200, description = "Tally after the vote", body = VoteTallyDto),
        (status = 400, description = "Invalid action", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn vote_resource(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ResourceVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let action = ResourceVoteAction::parse(&payload.action)?;
    let tally = ResourceService::new(&state.db)
        .vote(user.id, id, action)
        .await?;

    Ok((StatusCode::OK, Json(tally.into_resource_dto())))
}

async fn create(
    state: AppState,
    session: Session,
    payload: CreateResourceDto,
    visibility: Visibility,
) -> Result<(StatusCode, Json<CreatedResourceDto>), AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = NewResourceParam::from_dto(payload)?;
    let resource = ResourceService::new(&state.db)
        .create(&user, param, visibility)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResourceDto {
            ok: true,
            id: resource.id,
        }),
    ))
}

async fn delete(
    state: AppState,
    session: Session,
    id: i32,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let storage = StorageClient::new(&state.http_client, &state.storage);
    ResourceService::new(&state.db)
        .delete(&user, id, &storage, &state.storage.bucket)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Resource deleted"))))
}
