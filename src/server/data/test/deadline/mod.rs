use crate::server::{data::deadline::DeadlineRepository, model::course::ClassKind};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_upcoming;
mod set_vote;
