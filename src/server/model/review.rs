use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{error::AppError, model::vote::VoteTally},
};

pub const MAX_REVIEW_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub course_id: i32,
    pub user_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
    pub votes: VoteTally,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model, author_name: String, votes: VoteTally) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            user_id: entity.user_id,
            author_name,
            rating: entity.rating,
            review_text: entity.review_text,
            created_at: entity.created_at,
            votes,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            course_id: self.course_id,
            user_id: self.user_id,
            author_name: self.author_name,
            rating: self.rating,
            review_text: self.review_text,
            created_at: self.created_at,
            agree_count: self.votes.positive,
            disagree_count: self.votes.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewParam {
    pub course_id: i32,
    pub rating: i32,
    pub review_text: String,
}

impl CreateReviewParam {
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let review_text = dto.review_text.trim().to_string();
        let length = review_text.chars().count();
        if length == 0 || length > MAX_REVIEW_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Review must be between 1 and {} characters",
                MAX_REVIEW_LENGTH
            )));
        }

        Ok(Self {
            course_id: dto.course_id,
            rating: dto.rating,
            review_text,
        })
    }

    /// Activity title, e.g. `Reviewed a course ★★★★☆`.
    pub fn stars(&self) -> String {
        let filled = self.rating.clamp(0, 5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    /// Review text cut to 100 characters with `...` appended when longer.
    pub fn excerpt(&self) -> String {
        if self.review_text.chars().count() > 100 {
            let cut: String = self.review_text.chars().take(100).collect();
            format!("{}...", cut)
        } else {
            self.review_text.clone()
        }
    }
}
