use crate::server::{
    data::user_deadline::UserDeadlineRepository,
    model::deadline::{Deadline, DeadlineCopySource, UpdateDeadlineParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_upcoming;
mod insert_copies;
mod set_completed;
mod update_copies;
