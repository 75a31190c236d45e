use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::mark::{CourseMarksDto, MarkEntryDto, UpsertMarkDto},
    server::{error::AppError, model::string_enum},
};

string_enum!(
    MarkCategory, "mark category" {
        Quiz => "quiz",
        Assignment => "assignment",
        Mid => "mid",
        Final => "final",
    }
);

#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub course_id: i32,
    pub category: MarkCategory,
    pub deadline_id: String,
    pub obtained: f64,
    pub out_of: f64,
    pub updated_at: DateTime<Utc>,
}

impl Mark {
    pub fn from_entity(entity: entity::mark::Model) -> Result<Self, DbErr> {
        Ok(Self {
            course_id: entity.course_id,
            category: entity.category.parse()?,
            deadline_id: entity.deadline_id,
            obtained: entity.obtained,
            out_of: entity.out_of,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> MarkEntryDto {
        MarkEntryDto {
            deadline_id: self.deadline_id,
            obtained: self.obtained,
            out_of: self.out_of,
        }
    }
}

/// All marks a user recorded for one course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseMarks {
    pub course_id: i32,
    pub marks: Vec<Mark>,
}

impl CourseMarks {
    /// Groups the marks by category.
    pub fn into_dto(self) -> CourseMarksDto {
        let mut dto = CourseMarksDto {
            course_id: self.course_id,
            quiz: Vec::new(),
            assignment: Vec::new(),
            mid: Vec::new(),
            final_exam: Vec::new(),
        };

        for mark in self.marks {
            let bucket = match mark.category {
                MarkCategory::Quiz => &mut dto.quiz,
                MarkCategory::Assignment => &mut dto.assignment,
                MarkCategory::Mid => &mut dto.mid,
                MarkCategory::Final => &mut dto.final_exam,
            };
            bucket.push(mark.into_dto());
        }

        dto
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertMarkParam {
    pub course_id: i32,
    pub category: MarkCategory,
    pub deadline_id: String,
    pub obtained: f64,
    pub out_of: f64,
}

impl UpsertMarkParam {
    pub fn from_dto(dto: UpsertMarkDto) -> Result<Self, AppError> {
        let category = dto
            .kind
            .trim()
            .to_lowercase()
            .parse::<MarkCategory>()
            .map_err(|_| AppError::BadRequest("Invalid mark type".to_string()))?;

        if dto.out_of.is_nan() || dto.out_of <= 0.0 {
            return Err(AppError::BadRequest("outOf must be greater than 0".to_string()));
        }
        if dto.obtained.is_nan() || dto.obtained < 0.0 {
            return Err(AppError::BadRequest("obtained must not be negative".to_string()));
        }

        Ok(Self {
            course_id: dto.course_id,
            category,
            deadline_id: dto.deadline_id.trim().to_string(),
            obtained: dto.obtained,
            out_of: dto.out_of,
        })
    }
}
