use crate::server::data::interest::InterestRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace;
