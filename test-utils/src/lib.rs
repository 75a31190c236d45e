//! Campus Portal Test Utils
//!
//! Shared testing utilities for the campus portal backend. Tests build an in-memory SQLite
//! database containing only the tables they need, optionally attach a session backed by the
//! same database, and seed rows through the entity factories.
//!
//! - **TestBuilder**: fluent builder choosing which tables to create
//! - **TestContext**: database connection plus lazily created session
//! - **factory**: entity factories with sensible defaults
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn enrolls_user() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_course_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let (course, section) = factory::create_course_with_section(db).await?;
//!     factory::enroll(db, user.id, course.id, &section.name).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
