//! Course catalog and enrollment service.

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository},
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        course::{Course, Enrollment, SelectedCourse, UpsertCourseParam},
    },
    service::activity::ActivityService,
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).find_by_ids(ids).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// Creates or replaces a catalog entry with its sections.
    ///
    /// The course row and all section rows are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Course)` - The stored course
    /// - `Err(AppError::BadRequest)` - Blank code or name, or blank/duplicate section names
    pub async fn upsert(&self, param: UpsertCourseParam) -> Result<Course, AppError> {
        if param.course_code.is_empty() || param.course_name.is_empty() {
            return Err(AppError::BadRequest(
                "Course code and name are required".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for section in &param.sections {
            if section.name.is_empty() || !names.insert(section.name.as_str()) {
                return Err(AppError::BadRequest(
                    "Section names must be present and unique".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;
        let course = CourseRepository::new(&txn).upsert(param).await?;
        txn.commit().await?;

        tracing::info!("Upserted course {} with {} sections", course.course_code, course.sections.len());

        Ok(course)
    }

    pub async fn get_enrollments(&self, user_id: i32) -> Result<Vec<Enrollment>, AppError> {
        Ok(EnrollmentRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Replaces the user's enrollments with the selection.
    ///
    /// Only the first selection per course is kept. Newly added courses are logged as
    /// `course_enrolled` and removed ones as `course_dropped`.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - The enrollments now stored
    /// - `Err(AppError::NotFound)` - A course or section in the selection does not exist
    pub async fn set_enrollments(
        &self,
        user_id: i32,
        selected: Vec<SelectedCourse>,
    ) -> Result<Vec<Enrollment>, AppError> {
        let mut seen = HashSet::new();
        let selected: Vec<SelectedCourse> = selected
            .into_iter()
            .filter(|selection| seen.insert(selection.course_id))
            .collect();

        let course_ids: Vec<i32> = selected.iter().map(|s| s.course_id).collect();
        let courses = CourseRepository::new(self.db).find_by_ids(&course_ids).await?;
        for selection in &selected {
            let Some(course) = courses.iter().find(|c| c.id == selection.course_id) else {
                return Err(AppError::NotFound(format!(
                    "Course {} not found",
                    selection.course_id
                )));
            };
            if course.section(&selection.section).is_none() {
                return Err(AppError::NotFound(format!(
                    "Section {} not found in {}",
                    selection.section, course.course_code
                )));
            }
        }

        let txn = self.db.begin().await?;
        let enrollment_repo = EnrollmentRepository::new(&txn);
        let previous = enrollment_repo.get_for_user(user_id).await?;
        enrollment_repo.replace(user_id, &selected).await?;
        let current = enrollment_repo.get_for_user(user_id).await?;
        txn.commit().await?;

        let activity = ActivityService::new(self.db);
        for enrollment in &current {
            if !previous.iter().any(|p| p.course_id == enrollment.course_id) {
                activity
                    .log(
                        user_id,
                        NewActivity::new(
                            ActivityAction::CourseEnrolled,
                            format!("Enrolled in {}", enrollment.course_code),
                        )
                        .resource(ActivityResourceType::Course, enrollment.course_id)
                        .metadata(serde_json::json!({ "section": enrollment.section })),
                    )
                    .await;
            }
        }
        for enrollment in &previous {
            if !current.iter().any(|c| c.course_id == enrollment.course_id) {
                activity
                    .log(
                        user_id,
                        NewActivity::new(
                            ActivityAction::CourseDropped,
                            format!("Dropped {}", enrollment.course_code),
                        )
                        .resource(ActivityResourceType::Course, enrollment.course_id),
                    )
                    .await;
            }
        }

        Ok(current)
    }
}
