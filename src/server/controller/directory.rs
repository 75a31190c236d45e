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
            CreateDirectoryDto, DirectoryDto, DirectoryPageDto, DirectoryValidationDto,
            DirectoryVisibilityDto, ValidateDirectoryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::resource::{CreateDirectoryParam, DirectoryQuery, Visibility},
        service::{
            directory::{
                DirectoryService, PRIVATE_DEFAULT_LIMIT, PRIVATE_MAX_LIMIT, PUBLIC_DEFAULT_LIMIT,
                PUBLIC_MAX_LIMIT,
            },
            storage::StorageClient,
        },
        state::AppState,
    },
};

pub static DIRECTORY_TAG: &str = "directory";

#[derive(Deserialize)]
pub struct DirectoryListParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl DirectoryListParams {
    fn into_query(self, default_limit: u64, max_limit: u64) -> DirectoryQuery {
        DirectoryQuery::from_request(
            self.q,
            self.sort.as_deref(),
            self.page,
            self.limit,
            default_limit,
            max_limit,
        )
    }
}

/// Public course directories, one per catalog course.
///
/// System directories are created on demand for courses that have none yet. Courses
/// with a lab section also get `Theory` and `Lab` subdirectories.
///
/// # Arguments
/// - `q` - Case-insensitive prefix of the course code or name
/// - `sort` - `newest`, `oldest`, `code_asc` (default), `code_desc`, `title_asc` or `title_desc`
/// - `page` - 1-based page, defaults to 1
/// - `limit` - Directories per page, 1 to 100, defaults to 50
#[utoipa::path(
    get,
    path = "/api/resource-directories",
    tag = DIRECTORY_TAG,
    params(
        ("q" = Option<String>, Query, description = "Course code or name prefix"),
        ("sort" = Option<String>, Query, description = "Sort order"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Directories per page")
    ),
    responses(
        (status = 200, description = "Page of public directories", body = DirectoryPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_directories(
    State(state): State<AppState>,
    Query(params): Query<DirectoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query(PUBLIC_DEFAULT_LIMIT, PUBLIC_MAX_LIMIT);

    let page = DirectoryService::new(&state.db)
        .get_public_page(query)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(false))))
}

#[utoipa::path(
    get,
    path = "/api/resource-directories/{id}",
    tag = DIRECTORY_TAG,
    params(("id" = i32, Path, description = "Directory ID")),
    responses(
        (status = 200, description = "Directory with its subdirectories", body = DirectoryDto),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn get_public_directory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let directory = DirectoryService::new(&state.db).get_public(id).await?;

    Ok((StatusCode::OK, Json(directory.into_dto())))
}

/// Checks whether a course code can back a new directory.
///
/// Validation failures are reported in the body with `valid: false`, not as errors.
#[utoipa::path(
    post,
    path = "/api/resource-directories/validate",
    tag = DIRECTORY_TAG,
    request_body = ValidateDirectoryDto,
    responses(
        (status = 200, description = "Validation result", body = DirectoryValidationDto)
    ),
)]
pub async fn validate_directory(
    State(state): State<AppState>,
    Json(payload): Json<ValidateDirectoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let validation = DirectoryService::new(&state.db)
        .validate(&payload.course_code, payload.ignore_duplicates)
        .await?;

    Ok((StatusCode::OK, Json(validation.into_dto())))
}

/// The caller's own private and connection-scoped directories.
///
/// Same filters as the public listing, with a default of 12 and a maximum of 50 per
/// page. The response also carries `totalPages`.
#[utoipa::path(
    get,
    path = "/api/private-resource-directories",
    tag = DIRECTORY_TAG,
    params(
        ("q" = Option<String>, Query, description = "Course code or name prefix"),
        ("sort" = Option<String>, Query, description = "Sort order"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Directories per page")
    ),
    responses(
        (status = 200, description = "Page of the caller's directories", body = DirectoryPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_private_directories(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DirectoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let query = params.into_query(PRIVATE_DEFAULT_LIMIT, PRIVATE_MAX_LIMIT);

    let page = DirectoryService::new(&state.db)
        .get_private_page(user.id, query)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(true))))
}

#[utoipa::path(
    post,
    path = "/api/private-resource-directories",
    tag = DIRECTORY_TAG,
    request_body = CreateDirectoryDto,
    responses(
        (status = 201, description = "Directory created", body = DirectoryDto),
        (status = 400, description = "Missing title or course code, or invalid visibility", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_private_directory(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDirectoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let directory = DirectoryService::new(&state.db)
        .create_private(user.id, CreateDirectoryParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(directory.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/private-resource-directories/{id}",
    tag = DIRECTORY_TAG,
    params(("id" = i32, Path, description = "Directory ID")),
    responses(
        (status = 200, description = "Owned directory", body = DirectoryDto),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn get_private_directory(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let directory = DirectoryService::new(&state.db)
        .get_owned(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(directory.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/private-resource-directories/{id}",
    tag = DIRECTORY_TAG,
    params(("id" = i32, Path, description = "Directory ID")),
    request_body = DirectoryVisibilityDto,
    responses(
        (status = 200, description = "Visibility changed", body = DirectoryDto),
        (status = 400, description = "Visibility must be private or connections", body = ErrorDto),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn set_directory_visibility(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<DirectoryVisibilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let visibility = Visibility::parse_personal(&payload.visibility)?;
    let directory = DirectoryService::new(&state.db)
        .set_visibility(user.id, id, visibility)
        .await?;

    Ok((StatusCode::OK, Json(directory.into_dto())))
}

/// Deletes an owned directory with every resource in it. Stored files are removed
/// after the rows are gone.
#[utoipa::path(
    delete,
    path = "/api/private-resource-directories/{id}",
    tag = DIRECTORY_TAG,
    params(("id" = i32, Path, description = "Directory ID")),
    responses(
        (status = 200, description = "Directory deleted", body = MessageDto),
        (status = 404, description = "Directory not found", body = ErrorDto)
    ),
)]
pub async fn delete_private_directory(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let storage = StorageClient::new(&state.http_client, &state.storage);
    DirectoryService::new(&state.db)
        .delete_owned(user.id, id, &storage, &state.storage.bucket)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Directory deleted"))))
}
