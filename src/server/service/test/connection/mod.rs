use crate::server::{
    error::AppError,
    model::{
        connection::{AcceptOutcome, RequestOutcome},
        user::User,
    },
    service::connection::ConnectionService,
};
use test_utils::{builder::TestBuilder, factory};

mod request;
mod respond;
