use crate::server::{
    data::directory::DirectoryRepository,
    error::AppError,
    model::resource::{CreateDirectoryParam, DirectoryQuery, DirectoryValidation, Visibility},
    service::{directory::DirectoryService, storage::StorageClient},
    state::StorageSettings,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, resource::DirectoryFactory},
};

mod owned;
mod system;
mod validate;
mod visible;

/// Creates a catalog course; with `with_lab` one section also gets a lab schedule.
async fn course_with_sections(
    db: &sea_orm::DatabaseConnection,
    code: &str,
    with_lab: bool,
) -> Result<entity::course::Model, AppError> {
    let course = factory::course::CourseFactory::new(db)
        .course_code(code)
        .course_name(format!("{} course", code))
        .build()
        .await?;
    let section = factory::create_section(db, course.id, "01").await?;
    factory::create_schedule(db, section.id, "theory").await?;
    if with_lab {
        factory::create_schedule(db, section.id, "lab").await?;
    }

    Ok(course)
}

fn storage_settings() -> StorageSettings {
    StorageSettings {
        base_url: "http://storage.invalid".to_string(),
        service_key: "test-key".to_string(),
        bucket: "uploads".to_string(),
        event_bucket: "event-images".to_string(),
    }
}
