//! Entity factories with sensible defaults.
//!
//! Each factory module offers a `*Factory` builder for customized rows and `create_*`
//! shorthands for defaults. Factories never create parents implicitly, except for the
//! combined helpers in [`helpers`].
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (user, course, section) = factory::create_enrolled_user(&db).await?;
//! let deadline = factory::deadline::DeadlineFactory::new(&db, course.id, &section.name, user.id)
//!     .kind("lab")
//!     .build()
//!     .await?;
//! ```

pub mod club;
pub mod connection;
pub mod course;
pub mod deadline;
pub mod enrollment;
pub mod event;
pub mod helpers;
pub mod resource;
pub mod review;
pub mod user;

pub use club::create_club;
pub use connection::{connect, create_connection, create_study_invite};
pub use course::{create_course, create_schedule, create_section};
pub use enrollment::enroll;
pub use event::{create_event, create_registration};
pub use helpers::{create_course_with_section, create_enrolled_user};
pub use review::create_review;
pub use user::{create_user, create_user_named};
