use crate::server::{
    data::mark::MarkRepository,
    model::mark::{MarkCategory, UpsertMarkParam},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
