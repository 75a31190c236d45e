use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParam, UpdateEventParam},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_upcoming_paginated;
mod update;
