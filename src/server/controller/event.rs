use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, EventPageDto, RegisteredEventDto, RegistrationDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{CreateEventParam, Event, Registrant, UpdateEventParam},
        service::{
            event::{EventService, DEFAULT_EVENT_LIMIT},
            storage::StorageClient,
        },
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageParams {
    fn bounds(&self) -> (u64, u64) {
        (self.page.unwrap_or(1), self.limit.unwrap_or(DEFAULT_EVENT_LIMIT))
    }
}

/// Upcoming events, earliest first.
///
/// # Arguments
/// - `page` - 1-based page, defaults to 1
/// - `limit` - Events per page, 1 to 100, defaults to 50
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Events per page")
    ),
    responses(
        (status = 200, description = "Page of upcoming events", body = EventPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = params.bounds();

    let events = EventService::new(&state.db).get_upcoming(page, limit).await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Creates an event for the caller's club.
///
/// # Access Control
/// - `ClubAdmin` - Verified admin of a club
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Missing field or malformed date or time
/// - `403 Forbidden` - Caller is not a club admin
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a club admin", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClubAdmin])
        .await?;

    let event = EventService::new(&state.db)
        .create(&admin, CreateEventParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Partially updates an event of the caller's club.
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Malformed field or a date before today
/// - `403 Forbidden` - The event belongs to another club
/// - `404 Not Found` - Event does not exist
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 403, description = "Not the admin of the event's club", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClubAdmin])
        .await?;

    let param = UpdateEventParam::from_dto(payload, Utc::now().date_naive())?;
    let event = EventService::new(&state.db)
        .update(&admin, id, param)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Deletes an event with its registrations. The stored banner image is removed
/// afterwards; a failed removal is only logged.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 403, description = "Not the admin of the event's club", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClubAdmin])
        .await?;

    let storage = StorageClient::new(&state.http_client, &state.storage);
    EventService::new(&state.db)
        .delete(&admin, id, &storage)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Event deleted"))))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registered or already registered", body = MessageDto),
        (status = 400, description = "Registration is closed", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn register_for_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = EventService::new(&state.db).register(user.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new(outcome.message()))))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}/register",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registration cancelled", body = MessageDto),
        (status = 400, description = "Event already started", body = ErrorDto),
        (status = 404, description = "Event or registration not found", body = ErrorDto)
    ),
)]
pub async fn cancel_registration(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db)
        .cancel_registration(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Registration cancelled"))))
}

/// Active registrants of an event, newest first.
///
/// # Access Control
/// - `ClubAdmin` - Admin of the club that owns the event
#[utoipa::path(
    get,
    path = "/api/events/{id}/registrations",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registrants", body = Vec<RegistrationDto>),
        (status = 403, description = "Not the admin of the event's club", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_registrations(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClubAdmin])
        .await?;

    let registrants: Vec<RegistrationDto> = EventService::new(&state.db)
        .get_registrants(&admin, id)
        .await?
        .into_iter()
        .map(Registrant::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(registrants)))
}

#[utoipa::path(
    get,
    path = "/api/events/my-events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events of the caller's club, by date", body = Vec<EventDto>),
        (status = 403, description = "Not a club admin", body = ErrorDto)
    ),
)]
pub async fn get_club_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClubAdmin])
        .await?;

    let events: Vec<EventDto> = EventService::new(&state.db)
        .get_club_events(&admin)
        .await?
        .into_iter()
        .map(Event::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(events)))
}

/// Upcoming events tagged with one of the caller's interests.
#[utoipa::path(
    get,
    path = "/api/events/recommended",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Events per page")
    ),
    responses(
        (status = 200, description = "Page of recommended events", body = EventPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_recommended_events(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let (page, limit) = params.bounds();

    let events = EventService::new(&state.db)
        .get_recommended(user.id, page, limit)
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/registered",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "The caller's active registrations", body = Vec<RegisteredEventDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_registered_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let now = Utc::now();
    let registered: Vec<RegisteredEventDto> = EventService::new(&state.db)
        .get_registered(user.id)
        .await?
        .into_iter()
        .map(|item| item.into_dto(now))
        .collect();

    Ok((StatusCode::OK, Json(registered)))
}
