//! Shared helpers for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique value for building distinct test identifiers.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course with a single section `"1"` that has a theory schedule.
pub async fn create_course_with_section(
    db: &DatabaseConnection,
) -> Result<(entity::course::Model, entity::course_section::Model), DbErr> {
    let course = crate::factory::course::create_course(db).await?;
    let section = crate::factory::course::create_section(db, course.id, "1").await?;
    crate::factory::course::create_schedule(db, section.id, "theory").await?;

    Ok((course, section))
}

/// Creates a user enrolled in a fresh course and section.
pub async fn create_enrolled_user(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::course::Model,
        entity::course_section::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (course, section) = create_course_with_section(db).await?;
    crate::factory::enrollment::enroll(db, user.id, course.id, &section.name).await?;

    Ok((user, course, section))
}
