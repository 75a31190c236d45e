//! Wire types shared between the HTTP API and its clients.
//!
//! DTOs are plain serde structs. With the `server` feature enabled they also derive
//! `utoipa::ToSchema` so the OpenAPI document can reference them.

pub mod activity;
pub mod api;
pub mod auth;
pub mod chat;
pub mod club;
pub mod connection;
pub mod course;
pub mod deadline;
pub mod event;
pub mod mark;
pub mod resource;
pub mod review;
pub mod study;
pub mod upload;
pub mod user;
