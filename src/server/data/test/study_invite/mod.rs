use crate::server::data::study_invite::StudyInviteRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_for_user;
mod deactivate;
mod deactivate_older_than;
