use crate::server::{
    data::directory::DirectoryRepository,
    model::resource::{DirectoryQuery, DirectorySort, Visibility},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, resource::{DirectoryFactory, ResourceFactory}},
};

mod create_system;
mod delete;
mod get_public_paginated;

fn query(q: Option<&str>, sort: DirectorySort) -> DirectoryQuery {
    DirectoryQuery {
        q: q.map(str::to_string),
        sort,
        page: 1,
        limit: 50,
    }
}
