use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, is_unique_violation, review::ReviewRepository},
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        review::{CreateReviewParam, Review},
        user::User,
        vote::VoteChoice,
    },
    service::activity::ActivityService,
};

/// Course reviews. Each user may review a course once.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_course(&self, course_id: i32, viewer_id: Option<i32>) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_for_course(course_id, viewer_id)
            .await?)
    }

    /// Posts the author's review of a course.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown course
    /// - `Err(AppError::Conflict)` - The author already reviewed this course
    pub async fn create(&self, author: &User, param: CreateReviewParam) -> Result<Review, AppError> {
        let Some(course) = CourseRepository::new(self.db)
            .find_by_id(param.course_id)
            .await?
        else {
            return Err(AppError::NotFound("Course not found".to_string()));
        };

        let repo = ReviewRepository::new(self.db);
        if repo.exists(course.id, author.id).await? {
            return Err(already_reviewed());
        }

        let review = match repo
            .create(author.id, author.name.clone(), &param, Utc::now())
            .await
        {
            Ok(review) => review,
            Err(err) if is_unique_violation(&err) => return Err(already_reviewed()),
            Err(err) => return Err(err.into()),
        };

        ActivityService::new(self.db)
            .log(
                author.id,
                NewActivity::new(
                    ActivityAction::ReviewPosted,
                    format!("Reviewed {} {}", course.course_code, param.stars()),
                )
                .resource(ActivityResourceType::Review, review.id)
                .description(param.excerpt())
                .metadata(serde_json::json!({
                    "courseId": course.id,
                    "rating": param.rating,
                })),
            )
            .await;

        Ok(review)
    }

    /// Deletes the author's own review.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such review
    /// - `Err(AppError::Forbidden)` - The review belongs to someone else
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);
        let review = repo.find_by_id(id).await?.ok_or_else(review_not_found)?;
        if review.user_id != user_id {
            return Err(AppError::Forbidden(
                "You can only delete your own reviews".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Records the user's vote, replacing an earlier one. Voting the same way again
    /// leaves the vote in place.
    pub async fn vote(&self, user_id: i32, id: i32, choice: VoteChoice) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(review_not_found());
        }

        repo.set_vote(id, user_id, choice.is_agree()).await?;

        Ok(())
    }
}

fn review_not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}

fn already_reviewed() -> AppError {
    AppError::Conflict("You have already reviewed this course".to_string())
}
