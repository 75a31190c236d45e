//! Course catalog repository.
//!
//! Courses are stored across three tables (course, section, class schedule). Reads
//! assemble them back into `Course` domain models with a fixed number of queries
//! regardless of how many courses are loaded.

use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::course::{ClassKind, Course, Section, UpsertCourseParam};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every course with its sections, ordered by course code.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::CourseCode)
            .all(self.db)
            .await?;

        self.assemble(courses).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.assemble(vec![course]).await?.pop())
    }

    /// Gets the courses with the given ids. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Course>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::course::Column::CourseCode)
            .all(self.db)
            .await?;

        self.assemble(courses).await
    }

    /// Finds a course by code. Codes are stored uppercase.
    pub async fn find_by_code(&self, course_code: &str) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find()
            .filter(entity::course::Column::CourseCode.eq(course_code.trim().to_uppercase()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.assemble(vec![course]).await?.pop())
    }

    /// Creates or replaces a catalog entry keyed by course code.
    ///
    /// Sections and their schedules are replaced wholesale. Callers run this inside a
    /// transaction so a failure cannot leave a course without sections.
    ///
    /// # Arguments
    /// - `param` - Course fields plus the complete section list
    ///
    /// # Returns
    /// - `Ok(Course)` - The stored course as it now reads
    /// - `Err(DbErr)` - Database error during any of the writes
    pub async fn upsert(&self, param: UpsertCourseParam) -> Result<Course, DbErr> {
        let course = entity::prelude::Course::insert(entity::course::ActiveModel {
            course_code: ActiveValue::Set(param.course_code),
            course_name: ActiveValue::Set(param.course_name),
            link: ActiveValue::Set(param.link),
            exam_day: ActiveValue::Set(param.exam_day),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::course::Column::CourseCode)
                .update_columns([
                    entity::course::Column::CourseName,
                    entity::course::Column::Link,
                    entity::course::Column::ExamDay,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        let old_section_ids: Vec<i32> = entity::prelude::CourseSection::find()
            .filter(entity::course_section::Column::CourseId.eq(course.id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|section| section.id)
            .collect();

        if !old_section_ids.is_empty() {
            entity::prelude::ClassSchedule::delete_many()
                .filter(entity::class_schedule::Column::SectionId.is_in(old_section_ids.clone()))
                .exec(self.db)
                .await?;
            entity::prelude::CourseSection::delete_many()
                .filter(entity::course_section::Column::Id.is_in(old_section_ids))
                .exec(self.db)
                .await?;
        }

        for section in param.sections {
            let row = entity::course_section::ActiveModel {
                course_id: ActiveValue::Set(course.id),
                name: ActiveValue::Set(section.name.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            let schedules = [(ClassKind::Theory, section.theory), (ClassKind::Lab, section.lab)];
            for (kind, schedule) in schedules {
                let Some(schedule) = schedule else {
                    continue;
                };

                entity::class_schedule::ActiveModel {
                    section_id: ActiveValue::Set(row.id),
                    kind: ActiveValue::Set(kind.as_str().to_string()),
                    days: ActiveValue::Set(schedule.joined_days()),
                    faculty: ActiveValue::Set(schedule.faculty),
                    details: ActiveValue::Set(schedule.details),
                    start_time: ActiveValue::Set(schedule.start_time),
                    end_time: ActiveValue::Set(schedule.end_time),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        let id = course.id;
        self.assemble(vec![course])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("course {}", id)))
    }

    /// Loads sections and schedules for the given course rows, keeping their order.
    async fn assemble(&self, courses: Vec<entity::course::Model>) -> Result<Vec<Course>, DbErr> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i32> = courses.iter().map(|course| course.id).collect();
        let sections = entity::prelude::CourseSection::find()
            .filter(entity::course_section::Column::CourseId.is_in(course_ids))
            .order_by_asc(entity::course_section::Column::Id)
            .all(self.db)
            .await?;

        let section_ids: Vec<i32> = sections.iter().map(|section| section.id).collect();
        let mut schedules: HashMap<i32, Vec<entity::class_schedule::Model>> = HashMap::new();
        if !section_ids.is_empty() {
            for schedule in entity::prelude::ClassSchedule::find()
                .filter(entity::class_schedule::Column::SectionId.is_in(section_ids))
                .all(self.db)
                .await?
            {
                schedules.entry(schedule.section_id).or_default().push(schedule);
            }
        }

        let mut sections_by_course: HashMap<i32, Vec<Section>> = HashMap::new();
        for section in sections {
            let course_id = section.course_id;
            let section_schedules = schedules.remove(&section.id).unwrap_or_default();
            sections_by_course
                .entry(course_id)
                .or_default()
                .push(Section::from_entity(section, section_schedules)?);
        }

        Ok(courses
            .into_iter()
            .map(|course| {
                let sections = sections_by_course.remove(&course.id).unwrap_or_default();
                Course::from_entity(course, sections)
            })
            .collect())
    }
}
