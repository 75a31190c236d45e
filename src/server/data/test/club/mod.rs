use crate::server::{data::club::ClubRepository, model::club::CreateClubParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_conflict;
