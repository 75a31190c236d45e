use crate::server::{
    data::user::UserRepository,
    model::user::{NewUserParam, SearchTier, UpdateProfileParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod search_tier;
mod update_profile;
mod upsert;
