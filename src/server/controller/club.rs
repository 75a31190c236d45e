use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        club::{AdminStatusDto, ClubDto, CreateClubDto, VerifyClubDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::club::{Club, CreateClubParam},
        service::club::ClubService,
        state::AppState,
    },
};

pub static CLUB_TAG: &str = "club";

#[utoipa::path(
    get,
    path = "/api/admin/clubs",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs", body = Vec<ClubDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_clubs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let clubs: Vec<ClubDto> = ClubService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Club::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(clubs)))
}

/// Registers a club with its admin email and secret key.
///
/// # Access Control
/// - `SuperAdmin` - Only emails listed in `SUPER_ADMIN_EMAILS`
///
/// # Returns
/// - `201 Created` - The new club
/// - `400 Bad Request` - Missing field, or name, email or key already used
/// - `403 Forbidden` - Not a super admin
#[utoipa::path(
    post,
    path = "/api/admin/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club created", body = ClubDto),
        (status = 400, description = "Invalid or duplicate club", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a super admin", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin(&state.settings.super_admin_emails)])
        .await?;

    let club = ClubService::new(&state.db)
        .create(CreateClubParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// Makes the caller the admin of the club owning the secret key.
///
/// The club's admin email must match the caller's email, ignoring case.
#[utoipa::path(
    post,
    path = "/api/admin/verify",
    tag = CLUB_TAG,
    request_body = VerifyClubDto,
    responses(
        (status = 200, description = "Caller is now the club admin", body = ClubDto),
        (status = 400, description = "Invalid secret key", body = ErrorDto),
        (status = 403, description = "Email does not match the club admin", body = ErrorDto)
    ),
)]
pub async fn verify_club(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let club = ClubService::new(&state.db)
        .verify(&user, &payload.secret_key)
        .await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/check-status",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "Club admin status", body = AdminStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn check_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = ClubService::new(&state.db).get_status(&user).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
