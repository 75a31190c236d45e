//! HTTP handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts request DTOs into parameter types, calls a service and converts the result
//! back into a DTO. Handlers carry `utoipa::path` annotations that the router collects
//! into the OpenAPI document.

pub mod activity;
pub mod auth;
pub mod chat;
pub mod club;
pub mod connection;
pub mod course;
pub mod deadline;
pub mod directory;
pub mod event;
pub mod mark;
pub mod proxy;
pub mod resource;
pub mod review;
pub mod study;
pub mod upload;
pub mod user;
