//! Route table, OpenAPI document and HTTP middleware stack.

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        activity, auth, chat, club, connection, course, deadline, directory, event, mark, proxy,
        resource, review, study, upload, user,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Sustained chat requests per second per client IP.
const CHAT_RATE_PER_SECOND: u64 = 1;
const CHAT_BURST_SIZE: u32 = 5;
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(OpenApi)]
#[openapi(
    info(title = "Campus Portal API"),
    tags(
        (name = "auth", description = "OAuth login and session identity"),
        (name = "user", description = "Registration, interests and user search"),
        (name = "profile", description = "Public profiles"),
        (name = "course", description = "Course catalog and enrollment"),
        (name = "deadline", description = "Shared section deadlines"),
        (name = "mark", description = "Personal marks"),
        (name = "connection", description = "Connections between students"),
        (name = "study", description = "Study session invites"),
        (name = "club", description = "Clubs and club admins"),
        (name = "event", description = "Club events and registrations"),
        (name = "upload", description = "Signed uploads to object storage"),
        (name = "review", description = "Course reviews"),
        (name = "directory", description = "Resource directories"),
        (name = "resource", description = "Shared study resources"),
        (name = "proxy", description = "View and download proxies"),
        (name = "activity", description = "Personal activity log"),
        (name = "chat", description = "Course Q&A assistant")
    )
)]
struct ApiDoc;

/// Builds the API router with CORS for `app_url`, request tracing and Swagger UI at
/// `/api/docs`.
///
/// The session layer is added by the caller once state is attached.
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(course_routes())
        .merge(deadline_routes())
        .merge(social_routes())
        .merge(event_routes())
        .merge(resource_routes())
        .merge(activity_routes())
        .merge(chat_routes()?)
        .split_for_parts();

    let origin = HeaderValue::from_str(app_url).map_err(|source| ConfigError::InvalidHeader {
        name: "APP_URL".to_string(),
        source,
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(user::get_current_user, user::register_student))
        .routes(routes!(user::check_user))
        .routes(routes!(user::create_user))
        .routes(routes!(user::get_users_by_ids))
        .routes(routes!(user::update_image))
        .routes(routes!(user::get_interests, user::set_interests))
        .routes(routes!(user::get_profile))
        .routes(routes!(user::get_username_by_student_id))
        .routes(routes!(user::update_profile))
        .routes(routes!(user::get_user_by_email))
        .routes(routes!(user::search_users))
}

fn course_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(course::get_courses, course::upsert_course))
        .routes(routes!(course::get_courses_by_ids))
        .routes(routes!(course::get_course))
        .routes(routes!(course::get_enrollments, course::set_enrollments))
        .routes(routes!(mark::get_marks, mark::upsert_mark))
        .routes(routes!(review::get_reviews, review::create_review))
        .routes(routes!(review::delete_review))
        .routes(routes!(review::vote_review))
}

fn deadline_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(deadline::get_upcoming_deadlines, deadline::create_deadline))
        .routes(routes!(deadline::update_deadline, deadline::delete_deadline))
        .routes(routes!(deadline::set_completion))
        .routes(routes!(deadline::vote_deadline))
        .routes(routes!(deadline::get_my_deadlines))
        .routes(routes!(deadline::get_finished_deadlines))
}

fn social_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(connection::request_connection))
        .routes(routes!(connection::accept_connection))
        .routes(routes!(connection::reject_connection))
        .routes(routes!(connection::cancel_connection))
        .routes(routes!(connection::disconnect))
        .routes(routes!(connection::get_incoming_requests))
        .routes(routes!(connection::get_connections))
        .routes(routes!(connection::get_connection_directories))
        .routes(routes!(study::start_session))
        .routes(routes!(study::get_invites))
        .routes(routes!(study::dismiss_invite))
}

fn event_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(club::get_clubs, club::create_club))
        .routes(routes!(club::verify_club))
        .routes(routes!(club::check_status))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(event::get_event, event::update_event, event::delete_event))
        .routes(routes!(event::register_for_event, event::cancel_registration))
        .routes(routes!(event::get_registrations))
        .routes(routes!(event::get_club_events))
        .routes(routes!(event::get_recommended_events))
        .routes(routes!(event::get_registered_events))
        .routes(routes!(upload::presign_event_image))
}

fn resource_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(directory::get_public_directories))
        .routes(routes!(directory::get_public_directory))
        .routes(routes!(directory::validate_directory))
        .routes(routes!(
            directory::get_private_directories,
            directory::create_private_directory
        ))
        .routes(routes!(
            directory::get_private_directory,
            directory::set_directory_visibility,
            directory::delete_private_directory
        ))
        .routes(routes!(
            resource::get_public_resources,
            resource::create_public_resource
        ))
        .routes(routes!(resource::delete_public_resource))
        .routes(routes!(resource::get_public_by_directory))
        .routes(routes!(resource::get_public_by_course))
        .routes(routes!(
            resource::get_private_resources,
            resource::create_private_resource
        ))
        .routes(routes!(resource::delete_private_resource))
        .routes(routes!(resource::get_private_by_directory))
        .routes(routes!(resource::vote_resource))
        .routes(routes!(upload::presign_resource))
        .routes(routes!(proxy::view))
        .routes(routes!(proxy::download))
}

fn activity_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(activity::get_activities, activity::create_activity))
        .routes(routes!(activity::delete_activity))
}

/// Chat is limited per client IP. Requires the server to provide `ConnectInfo`.
fn chat_routes() -> Result<OpenApiRouter<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(CHAT_RATE_PER_SECOND)
        .burst_size(CHAT_BURST_SIZE)
        .finish()
        .ok_or_else(|| ConfigError::InvalidRateLimit("chat".to_string()))?;

    let limiter = Arc::clone(governor_config.limiter());
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    Ok(OpenApiRouter::new()
        .routes(routes!(chat::ask))
        .layer(GovernorLayer::new(governor_config)))
}
