//! SeaORM entities for the campus portal schema.
//!
//! One module per table. Enumerated columns (visibility, kinds, statuses) are
//! stored as plain strings; the server's domain layer maps them to enums.

pub mod prelude;

pub mod activity;
pub mod class_schedule;
pub mod club;
pub mod connection;
pub mod course;
pub mod course_section;
pub mod deadline;
pub mod deadline_vote;
pub mod enrollment;
pub mod event;
pub mod event_registration;
pub mod event_tag;
pub mod mark;
pub mod resource;
pub mod resource_directory;
pub mod resource_vote;
pub mod review;
pub mod review_vote;
pub mod study_invite;
pub mod user;
pub mod user_deadline;
pub mod user_interest;
