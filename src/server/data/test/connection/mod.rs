use crate::server::{
    data::connection::ConnectionRepository, model::connection::ConnectionStatus,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod accepted_ids;
mod find_between;
mod set_status;
