//! Canonical deadline rows and their agree/disagree votes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    course::ClassKind,
    deadline::{CreateDeadlineParam, Deadline, UpdateDeadlineParam},
};

pub struct DeadlineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeadlineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the canonical deadline row.
    ///
    /// # Arguments
    /// - `id` - Pre-generated textual id
    /// - `param` - Validated deadline fields
    /// - `created_by` - Creator's user id
    /// - `now` - Creation time, which starts the edit window
    pub async fn create(
        &self,
        id: String,
        param: &CreateDeadlineParam,
        created_by: i32,
        now: DateTime<Utc>,
    ) -> Result<Deadline, DbErr> {
        let entity = entity::deadline::ActiveModel {
            id: ActiveValue::Set(id),
            course_id: ActiveValue::Set(param.course_id),
            section: ActiveValue::Set(param.section.clone()),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            title: ActiveValue::Set(param.title.clone()),
            details: ActiveValue::Set(param.details.clone()),
            submission_link: ActiveValue::Set(param.submission_link.clone()),
            last_date: ActiveValue::Set(param.last_date),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Deadline::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Deadline>, DbErr> {
        entity::prelude::Deadline::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Deadline::from_entity)
            .transpose()
    }

    /// Applies the fields present in `param` to the canonical row.
    pub async fn update(
        &self,
        id: &str,
        param: &UpdateDeadlineParam,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let mut active = entity::deadline::ActiveModel {
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        if let Some(title) = &param.title {
            active.title = ActiveValue::Set(title.clone());
        }
        if let Some(details) = &param.details {
            active.details = ActiveValue::Set(details.clone());
        }
        if let Some(link) = &param.submission_link {
            active.submission_link = ActiveValue::Set(link.clone());
        }
        if let Some(last_date) = param.last_date {
            active.last_date = ActiveValue::Set(last_date);
        }

        entity::prelude::Deadline::update_many()
            .set(active)
            .filter(entity::deadline::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a deadline and its votes. User copies are removed separately.
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::DeadlineVote::delete_many()
            .filter(entity::deadline_vote::Column::DeadlineId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Deadline::delete_many()
            .filter(entity::deadline::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deadlines of a course section due at or after `now`, soonest first.
    ///
    /// # Arguments
    /// - `course_id` / `section` - Section to list
    /// - `kind` - Optional theory/lab filter
    /// - `now` - Cut-off for "upcoming"
    pub async fn get_upcoming(
        &self,
        course_id: i32,
        section: &str,
        kind: Option<ClassKind>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Deadline>, DbErr> {
        let mut query = entity::prelude::Deadline::find()
            .filter(entity::deadline::Column::CourseId.eq(course_id))
            .filter(entity::deadline::Column::Section.eq(section))
            .filter(entity::deadline::Column::LastDate.gte(now));

        if let Some(kind) = kind {
            query = query.filter(entity::deadline::Column::Kind.eq(kind.as_str()));
        }

        query
            .order_by_asc(entity::deadline::Column::LastDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Deadline::from_entity)
            .collect()
    }

    /// Every deadline of a course section, soonest first.
    pub async fn get_for_section(&self, course_id: i32, section: &str) -> Result<Vec<Deadline>, DbErr> {
        entity::prelude::Deadline::find()
            .filter(entity::deadline::Column::CourseId.eq(course_id))
            .filter(entity::deadline::Column::Section.eq(section))
            .order_by_asc(entity::deadline::Column::LastDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Deadline::from_entity)
            .collect()
    }

    /// Votes on the given deadlines as `(user_id, agree)` pairs keyed by deadline id.
    pub async fn get_votes(&self, ids: &[String]) -> Result<HashMap<String, Vec<(i32, bool)>>, DbErr> {
        let mut votes: HashMap<String, Vec<(i32, bool)>> = HashMap::new();
        if ids.is_empty() {
            return Ok(votes);
        }

        for vote in entity::prelude::DeadlineVote::find()
            .filter(entity::deadline_vote::Column::DeadlineId.is_in(ids.to_vec()))
            .all(self.db)
            .await?
        {
            votes
                .entry(vote.deadline_id)
                .or_default()
                .push((vote.user_id, vote.agree));
        }

        Ok(votes)
    }

    /// The user's current vote on a deadline: `Some(true)` for agree.
    pub async fn find_vote(&self, deadline_id: &str, user_id: i32) -> Result<Option<bool>, DbErr> {
        let vote = entity::prelude::DeadlineVote::find_by_id((deadline_id.to_string(), user_id))
            .one(self.db)
            .await?;

        Ok(vote.map(|vote| vote.agree))
    }

    /// Records or switches a user's vote.
    pub async fn set_vote(&self, deadline_id: &str, user_id: i32, agree: bool) -> Result<(), DbErr> {
        entity::prelude::DeadlineVote::insert(entity::deadline_vote::ActiveModel {
            deadline_id: ActiveValue::Set(deadline_id.to_string()),
            user_id: ActiveValue::Set(user_id),
            agree: ActiveValue::Set(agree),
        })
        .on_conflict(
            OnConflict::columns([
                entity::deadline_vote::Column::DeadlineId,
                entity::deadline_vote::Column::UserId,
            ])
            .update_column(entity::deadline_vote::Column::Agree)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn clear_vote(&self, deadline_id: &str, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::DeadlineVote::delete_many()
            .filter(entity::deadline_vote::Column::DeadlineId.eq(deadline_id))
            .filter(entity::deadline_vote::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
