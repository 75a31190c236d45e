use crate::server::{
    data::{is_unique_violation, review::ReviewRepository},
    model::review::CreateReviewParam,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_for_course;
mod set_vote;
