use crate::server::{
    error::AppError,
    model::{study::StartStudySessionParam, user::User},
    service::study::StudyService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod invites;
mod start;

const ROOM_PREFIX: &str = "campus-test";
