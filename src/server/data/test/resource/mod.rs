use crate::server::data::resource::ResourceRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, resource::{DirectoryFactory, ResourceFactory}},
};

mod count_by_directory;
mod get_public_by_course_paginated;
mod set_vote;
