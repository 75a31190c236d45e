use crate::server::{
    data::activity::ActivityRepository,
    model::activity::{ActivityAction, ActivityFilter, ActivityResourceType, NewActivity},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_action;
mod delete;
mod get_paginated;
