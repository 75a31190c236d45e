//! Database repository layer for all domain entities.
//!
//! Each repository wraps a connection reference and performs the CRUD work for one
//! concern of the portal. Repositories use SeaORM entity models internally and return
//! domain models from `server::model`, so services never handle raw rows.
//!
//! Repositories that take part in multi-row writes (the course catalog, enrollments and
//! deadlines with their per-user copies) are generic over `ConnectionTrait`. Services pass
//! either the pooled connection or an open `DatabaseTransaction`.

pub mod activity;
pub mod club;
pub mod connection;
pub mod course;
pub mod deadline;
pub mod directory;
pub mod enrollment;
pub mod event;
pub mod interest;
pub mod mark;
pub mod registration;
pub mod resource;
pub mod review;
pub mod study_invite;
pub mod user;
pub mod user_deadline;

use sea_orm::{DbErr, SqlErr};

/// Whether an insert lost to a unique index or primary key, as when two requests
/// create the same row at once.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;
