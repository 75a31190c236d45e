use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::study::StudyInvite;

/// Invites to join a study room. Invites are never deleted, only deactivated.
pub struct StudyInviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyInviteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one active invite per invitee.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of invites written
    pub async fn create_many(
        &self,
        host_id: i32,
        room_slug: &str,
        invitees: &[i32],
        now: DateTime<Utc>,
    ) -> Result<usize, DbErr> {
        if invitees.is_empty() {
            return Ok(0);
        }

        let rows = invitees.iter().map(|user_id| entity::study_invite::ActiveModel {
            user_id: ActiveValue::Set(*user_id),
            host_id: ActiveValue::Set(host_id),
            room_slug: ActiveValue::Set(room_slug.to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::StudyInvite::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(invitees.len())
    }

    /// The user's active invites, newest first.
    pub async fn active_for_user(&self, user_id: i32, limit: u64) -> Result<Vec<StudyInvite>, DbErr> {
        let rows = entity::prelude::StudyInvite::find()
            .filter(entity::study_invite::Column::UserId.eq(user_id))
            .filter(entity::study_invite::Column::Active.eq(true))
            .order_by_desc(entity::study_invite::Column::CreatedAt)
            .order_by_desc(entity::study_invite::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(StudyInvite::from_entity).collect())
    }

    /// Deactivates an invite addressed to the user.
    ///
    /// # Returns
    /// - `Ok(true)` - Invite belonged to the user and is now inactive
    /// - `Ok(false)` - No such invite for this user
    pub async fn deactivate(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudyInvite::update_many()
            .set(entity::study_invite::ActiveModel {
                active: ActiveValue::Set(false),
                ..Default::default()
            })
            .filter(entity::study_invite::Column::Id.eq(id))
            .filter(entity::study_invite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deactivates every active invite created before `cutoff`.
    pub async fn deactivate_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::StudyInvite::update_many()
            .set(entity::study_invite::ActiveModel {
                active: ActiveValue::Set(false),
                ..Default::default()
            })
            .filter(entity::study_invite::Column::Active.eq(true))
            .filter(entity::study_invite::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
