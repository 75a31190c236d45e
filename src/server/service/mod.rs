//! Service layer between the controllers and the repositories.
//!
//! Services take validated parameter types, enforce the business rules (ownership, edit
//! windows, visibility) and coordinate repositories, transactions and outbound HTTP
//! calls. They return domain models; controllers convert those to DTOs.

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
pub mod storage;
pub mod study;
pub mod user;

#[cfg(test)]
mod test;
