pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_club_table;
mod m20260301_000002_create_user_table;
mod m20260301_000003_create_user_interest_table;
mod m20260302_000004_create_course_table;
mod m20260302_000005_create_course_section_table;
mod m20260302_000006_create_class_schedule_table;
mod m20260302_000007_create_enrollment_table;
mod m20260303_000008_create_deadline_table;
mod m20260303_000009_create_deadline_vote_table;
mod m20260303_000010_create_user_deadline_table;
mod m20260304_000011_create_mark_table;
mod m20260305_000012_create_connection_table;
mod m20260305_000013_create_study_invite_table;
mod m20260306_000014_create_event_table;
mod m20260306_000015_create_event_tag_table;
mod m20260306_000016_create_event_registration_table;
mod m20260307_000017_create_review_table;
mod m20260307_000018_create_review_vote_table;
mod m20260308_000019_create_resource_directory_table;
mod m20260308_000020_create_resource_table;
mod m20260308_000021_create_resource_vote_table;
mod m20260309_000022_create_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_club_table::Migration),
            Box::new(m20260301_000002_create_user_table::Migration),
            Box::new(m20260301_000003_create_user_interest_table::Migration),
            Box::new(m20260302_000004_create_course_table::Migration),
            Box::new(m20260302_000005_create_course_section_table::Migration),
            Box::new(m20260302_000006_create_class_schedule_table::Migration),
            Box::new(m20260302_000007_create_enrollment_table::Migration),
            Box::new(m20260303_000008_create_deadline_table::Migration),
            Box::new(m20260303_000009_create_deadline_vote_table::Migration),
            Box::new(m20260303_000010_create_user_deadline_table::Migration),
            Box::new(m20260304_000011_create_mark_table::Migration),
            Box::new(m20260305_000012_create_connection_table::Migration),
            Box::new(m20260305_000013_create_study_invite_table::Migration),
            Box::new(m20260306_000014_create_event_table::Migration),
            Box::new(m20260306_000015_create_event_tag_table::Migration),
            Box::new(m20260306_000016_create_event_registration_table::Migration),
            Box::new(m20260307_000017_create_review_table::Migration),
            Box::new(m20260307_000018_create_review_vote_table::Migration),
            Box::new(m20260308_000019_create_resource_directory_table::Migration),
            Box::new(m20260308_000020_create_resource_table::Migration),
            Box::new(m20260308_000021_create_resource_vote_table::Migration),
            Box::new(m20260309_000022_create_activity_table::Migration),
        ]
    }
}
