use crate::server::{
    data::{is_unique_violation, registration::RegistrationRepository},
    model::event::RegistrationStatus,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_registrants;
mod set_status;
