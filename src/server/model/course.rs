//! Course catalog and enrollment models.

use sea_orm::DbErr;

use crate::{
    model::course::{
        ClassScheduleDto, CourseDto, EnrollmentDto, SectionDto, SelectedCourseDto, UpsertCourseDto,
    },
    server::model::string_enum,
};

string_enum!(
    /// Class component of a section. Deadlines and subdirectories are split the same way.
    ClassKind, "class kind" {
        Theory => "theory",
        Lab => "lab",
    }
);

impl ClassKind {
    /// Capitalized label used for generated directory titles.
    pub fn label(&self) -> &'static str {
        match self {
            ClassKind::Theory => "Theory",
            ClassKind::Lab => "Lab",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassSchedule {
    pub faculty: String,
    pub details: String,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

impl ClassSchedule {
    pub fn from_entity(entity: entity::class_schedule::Model) -> Self {
        Self {
            faculty: entity.faculty,
            details: entity.details,
            days: split_days(&entity.days),
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    pub fn from_dto(dto: ClassScheduleDto) -> Self {
        Self {
            faculty: dto.faculty,
            details: dto.details,
            days: dto.days,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }

    pub fn into_dto(self) -> ClassScheduleDto {
        ClassScheduleDto {
            faculty: self.faculty,
            details: self.details,
            days: self.days,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// Days joined for storage in a single column.
    pub fn joined_days(&self) -> String {
        self.days.join(",")
    }
}

fn split_days(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|day| !day.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub theory: Option<ClassSchedule>,
    pub lab: Option<ClassSchedule>,
}

impl Section {
    /// Assembles a section from its row and class schedules.
    pub fn from_entity(
        entity: entity::course_section::Model,
        schedules: Vec<entity::class_schedule::Model>,
    ) -> Result<Self, DbErr> {
        let mut section = Self {
            name: entity.name,
            theory: None,
            lab: None,
        };

        for schedule in schedules {
            match schedule.kind.parse::<ClassKind>()? {
                ClassKind::Theory => section.theory = Some(ClassSchedule::from_entity(schedule)),
                ClassKind::Lab => section.lab = Some(ClassSchedule::from_entity(schedule)),
            }
        }

        Ok(section)
    }

    pub fn has_lab(&self) -> bool {
        self.lab.is_some()
    }

    pub fn from_dto(dto: SectionDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            theory: dto.theory.map(ClassSchedule::from_dto),
            lab: dto.lab.map(ClassSchedule::from_dto),
        }
    }

    pub fn into_dto(self) -> SectionDto {
        SectionDto {
            name: self.name,
            theory: self.theory.map(ClassSchedule::into_dto),
            lab: self.lab.map(ClassSchedule::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub link: Option<String>,
    pub exam_day: Option<String>,
    pub sections: Vec<Section>,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model, sections: Vec<Section>) -> Self {
        Self {
            id: entity.id,
            course_code: entity.course_code,
            course_name: entity.course_name,
            link: entity.link,
            exam_day: entity.exam_day,
            sections,
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Whether any section of the course has a lab component.
    pub fn has_lab(&self) -> bool {
        self.sections.iter().any(Section::has_lab)
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            course_code: self.course_code,
            course_name: self.course_name,
            link: self.link,
            exam_day: self.exam_day,
            sections: self.sections.into_iter().map(Section::into_dto).collect(),
        }
    }
}

/// Catalog entry to create or replace, keyed by course code.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertCourseParam {
    pub course_code: String,
    pub course_name: String,
    pub link: Option<String>,
    pub exam_day: Option<String>,
    pub sections: Vec<Section>,
}

impl UpsertCourseParam {
    pub fn from_dto(dto: UpsertCourseDto) -> Self {
        Self {
            course_code: dto.course_code.trim().to_uppercase(),
            course_name: dto.course_name.trim().to_string(),
            link: dto.link,
            exam_day: dto.exam_day,
            sections: dto.sections.into_iter().map(Section::from_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub course_id: i32,
    pub course_code: String,
    pub course_name: String,
    pub section: String,
}

impl Enrollment {
    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            course_id: self.course_id,
            course_code: self.course_code,
            course_name: self.course_name,
            section: self.section,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedCourse {
    pub course_id: i32,
    pub section: String,
}

impl SelectedCourse {
    pub fn from_dto(dto: SelectedCourseDto) -> Self {
        Self {
            course_id: dto.course_id,
            section: dto.section.trim().to_string(),
        }
    }
}
