use crate::server::{
    data::interest::InterestRepository,
    error::AppError,
    model::{event::RegisterOutcome, user::User},
    service::event::EventService,
    util::page::MAX_PAGE,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod manage;
mod recommended;
mod register;
