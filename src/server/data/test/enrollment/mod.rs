use crate::server::{data::enrollment::EnrollmentRepository, model::course::SelectedCourse};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace;
mod user_ids_in_section;
