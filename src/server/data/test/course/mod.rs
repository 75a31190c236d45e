use crate::server::{
    data::course::CourseRepository,
    model::course::{ClassSchedule, Section, UpsertCourseParam},
};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_code;
mod upsert;
