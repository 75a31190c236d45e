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
        api::{ErrorDto, IdsDto, ValidDto},
        user::{
            CheckUserDto, CreateUserDto, InterestsDto, ProfileDto, RegisterStudentDto,
            UpdateProfileDto, UserCardDto, UserDto, UserSummaryDto, UsernameDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CheckUserParam, CreateUserParam, UpdateProfileParam, User},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";
pub static PROFILE_TAG: &str = "profile";

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub exclude_email: Option<String>,
}

/// GET /api/users - the registered user of the current session.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Registers or refreshes the session identity as a student.
///
/// Name, email and picture come from the identity provider. The username is derived from
/// the email on first registration.
///
/// # Returns
/// - `200 OK` - The stored user
/// - `400 Bad Request` - Student ID missing, malformed, or already taken
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterStudentDto,
    responses(
        (status = 200, description = "Registered user", body = UserDto),
        (status = 400, description = "Invalid student ID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn register_student(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &session).identity().await?;

    let user = UserService::new(&state.db)
        .register_student(&identity, payload.student_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/users/check",
    tag = USER_TAG,
    request_body = CheckUserDto,
    responses(
        (status = 200, description = "All submitted fields are valid and unused", body = ValidDto),
        (status = 400, description = "First validation failure", body = ErrorDto)
    ),
)]
pub async fn check_user(
    State(state): State<AppState>,
    Json(payload): Json<CheckUserDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .check(&CheckUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ValidDto { valid: true })))
}

/// Registers the session identity with explicitly chosen fields.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid or taken field, or the user already exists
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/users/create",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &session).identity().await?;

    let user = UserService::new(&state.db)
        .create(&identity, CreateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/users/by-ids",
    tag = USER_TAG,
    request_body = IdsDto,
    responses(
        (status = 200, description = "Users that exist", body = Vec<UserSummaryDto>),
        (status = 400, description = "More than 100 ids", body = ErrorDto)
    ),
)]
pub async fn get_users_by_ids(
    State(state): State<AppState>,
    Json(payload): Json<IdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let users: Vec<UserSummaryDto> = UserService::new(&state.db)
        .get_by_ids(&payload.ids)
        .await?
        .into_iter()
        .map(User::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Copies the identity provider's picture onto the user.
#[utoipa::path(
    put,
    path = "/api/users/update-image",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Picture updated", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_image(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let identity = guard.identity().await?;
    let user = guard.require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_image(&user, &identity)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/user/interests",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Interests in listed order", body = InterestsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_interests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let interests = UserService::new(&state.db).get_interests(user.id).await?;

    Ok((StatusCode::OK, Json(InterestsDto { interests })))
}

/// Replaces the user's interests with the normalized list.
#[utoipa::path(
    post,
    path = "/api/user/interests",
    tag = USER_TAG,
    request_body = InterestsDto,
    responses(
        (status = 200, description = "Stored interests", body = InterestsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn set_interests(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<InterestsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let interests = UserService::new(&state.db)
        .set_interests(user.id, payload.interests)
        .await?;

    Ok((StatusCode::OK, Json(InterestsDto { interests })))
}

/// Public profile by username.
///
/// Anonymous visitors are allowed. A registered viewer additionally receives the
/// connection state between them and the profile owner.
///
/// # Returns
/// - `200 OK` - Profile with defaults filled in
/// - `404 Not Found` - Unknown username
#[utoipa::path(
    get,
    path = "/api/profile/{username}",
    tag = PROFILE_TAG,
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Profile", body = ProfileDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let profile = UserService::new(&state.db)
        .get_profile(&username, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/profile/by-student-id/{student_id}",
    tag = PROFILE_TAG,
    params(("student_id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Username of the student", body = UsernameDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_username_by_student_id(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let username = UserService::new(&state.db)
        .username_by_student_id(&student_id)
        .await?;

    Ok((StatusCode::OK, Json(UsernameDto { username })))
}

/// Partially updates the caller's profile; absent fields stay as they are.
#[utoipa::path(
    put,
    path = "/api/profile/update",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/profile/user",
    tag = PROFILE_TAG,
    params(("email" = String, Query, description = "Email address")),
    responses(
        (status = 200, description = "User with that email", body = UserDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(email) = params.email.filter(|email| !email.trim().is_empty()) else {
        return Err(AppError::BadRequest("Email is required".to_string()));
    };

    let user = UserService::new(&state.db).find_by_email(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/search - ranked prefix search over names and usernames.
///
/// # Returns
/// - `200 OK` - Up to 10 users, best match first
/// - `400 Bad Request` - Missing or blank `q`, or malformed `excludeEmail`
#[utoipa::path(
    get,
    path = "/api/search",
    tag = USER_TAG,
    params(
        ("q" = String, Query, description = "Search prefix"),
        ("excludeEmail" = Option<String>, Query, description = "Email to leave out, usually the searcher's")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserCardDto>),
        (status = 400, description = "Missing query or invalid email", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let users: Vec<UserCardDto> = UserService::new(&state.db)
        .search(params.q.as_deref(), params.exclude_email.as_deref())
        .await?
        .into_iter()
        .map(User::into_card_dto)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}
