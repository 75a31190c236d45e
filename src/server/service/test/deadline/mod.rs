use crate::server::{
    error::AppError,
    model::{
        course::ClassKind,
        deadline::{CreateDeadlineParam, UpdateDeadlineParam},
        user::User,
        vote::VoteChoice,
    },
    service::deadline::DeadlineService,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
mod vote;

fn create_param(course_id: i32, section: &str) -> CreateDeadlineParam {
    CreateDeadlineParam {
        course_id,
        section: section.to_string(),
        kind: ClassKind::Theory,
        title: "Problem set 1".to_string(),
        details: "Chapters 1-3".to_string(),
        submission_link: None,
        last_date: Utc::now() + Duration::days(3),
    }
}
