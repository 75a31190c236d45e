use std::collections::HashMap;

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    review::{CreateReviewParam, Review},
    vote::VoteTally,
};

/// Course reviews with agree/disagree votes. One review per user per course.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reviews of a course, newest first, with author names and vote counts.
    ///
    /// # Arguments
    /// - `course_id` - Reviewed course
    /// - `viewer_id` - User whose own vote is reported in each tally, if any
    pub async fn get_for_course(
        &self,
        course_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<Review>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|(review, _)| review.id).collect();
        let mut votes = self.get_votes(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|(review, author)| {
                let tally =
                    VoteTally::from_votes(votes.remove(&review.id).unwrap_or_default(), viewer_id);
                let author_name = author.map(|user| user.name).unwrap_or_default();
                Review::from_entity(review, author_name, tally)
            })
            .collect())
    }

    /// Finds a review with its votes but without the author's name.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let votes = self.get_votes(&[id]).await?.remove(&id).unwrap_or_default();
        Ok(Some(Review::from_entity(
            review,
            String::new(),
            VoteTally::from_votes(votes, None),
        )))
    }

    pub async fn exists(&self, course_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let review = entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(review.is_some())
    }

    pub async fn create(
        &self,
        user_id: i32,
        author_name: String,
        param: &CreateReviewParam,
        now: DateTime<Utc>,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            course_id: ActiveValue::Set(param.course_id),
            user_id: ActiveValue::Set(user_id),
            rating: ActiveValue::Set(param.rating),
            review_text: ActiveValue::Set(param.review_text.clone()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity, author_name, VoteTally::default()))
    }

    /// Deletes a review and its votes.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ReviewVote::delete_many()
            .filter(entity::review_vote::Column::ReviewId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Records the user's vote, replacing any earlier one.
    pub async fn set_vote(&self, review_id: i32, user_id: i32, agree: bool) -> Result<(), DbErr> {
        entity::prelude::ReviewVote::insert(entity::review_vote::ActiveModel {
            review_id: ActiveValue::Set(review_id),
            user_id: ActiveValue::Set(user_id),
            agree: ActiveValue::Set(agree),
        })
        .on_conflict(
            OnConflict::columns([
                entity::review_vote::Column::ReviewId,
                entity::review_vote::Column::UserId,
            ])
            .update_column(entity::review_vote::Column::Agree)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    async fn get_votes(&self, ids: &[i32]) -> Result<HashMap<i32, Vec<(i32, bool)>>, DbErr> {
        let mut votes: HashMap<i32, Vec<(i32, bool)>> = HashMap::new();
        if ids.is_empty() {
            return Ok(votes);
        }

        for vote in entity::prelude::ReviewVote::find()
            .filter(entity::review_vote::Column::ReviewId.is_in(ids.to_vec()))
            .all(self.db)
            .await?
        {
            votes
                .entry(vote.review_id)
                .or_default()
                .push((vote.user_id, vote.agree));
        }

        Ok(votes)
    }
}
