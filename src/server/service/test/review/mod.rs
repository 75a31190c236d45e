use crate::server::{
    error::AppError,
    model::{review::CreateReviewParam, user::User, vote::VoteChoice},
    service::review::ReviewService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod vote;
