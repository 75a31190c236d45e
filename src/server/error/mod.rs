//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps the
//! domain-specific errors below and implements `IntoResponse`, so handlers can simply use
//! `?`. Every error response carries an `ErrorDto { error }` body.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Always 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for its own status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal failure. Logged in full, returned as a generic 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx error raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Outbound HTTP failure (identity provider, storage, QA endpoint).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// 403 with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// 409 with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// 502 when an upstream fetch proxied for the client fails.
    #[error("{0}")]
    BadGateway(String),

    /// 500; the message is logged but never returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Status code this error maps to, used by tests and response conversion alike.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthErr(err) => err.status(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Forbidden(msg)
            | Self::Conflict(msg)
            | Self::BadGateway(msg) => (status, Json(ErrorDto { error: msg })).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into a logged 500 with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
