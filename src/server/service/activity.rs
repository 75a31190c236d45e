//! Activity log service.
//!
//! Other services record actions through [`ActivityService::log`], which never fails the
//! calling operation. The remaining methods back the activity endpoints.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::activity::{Activity, ActivityFilter, ActivityPage, NewActivity},
    util::page::clamp_page,
};

pub const DEFAULT_ACTIVITY_LIMIT: u64 = 20;
pub const MAX_ACTIVITY_LIMIT: u64 = 100;

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the user's log.
    ///
    /// Failures are logged at `warn` and discarded so the triggering operation still
    /// succeeds.
    pub async fn log(&self, user_id: i32, activity: NewActivity) {
        let action = activity.action.clone();
        if let Err(err) = ActivityRepository::new(self.db)
            .create(user_id, activity, Utc::now())
            .await
        {
            tracing::warn!("Failed to log activity {} for user {}: {}", action, user_id, err);
        }
    }

    /// Gets one page of the user's entries plus per-action counts.
    ///
    /// # Arguments
    /// - `page` - 1-based page, values below 1 are raised to 1
    /// - `limit` - Clamped to `1..=100`
    pub async fn get_page(
        &self,
        user_id: i32,
        filter: ActivityFilter,
        page: u64,
        limit: u64,
    ) -> Result<ActivityPage, AppError> {
        let repo = ActivityRepository::new(self.db);
        let page = clamp_page(page);
        let limit = limit.clamp(1, MAX_ACTIVITY_LIMIT);

        let (activities, total) = repo.get_paginated(user_id, &filter, page, limit).await?;
        let counts = repo.count_by_action(user_id).await?;

        Ok(ActivityPage {
            activities,
            page,
            limit,
            total,
            counts,
        })
    }

    /// Stores a client-submitted entry.
    pub async fn create(&self, user_id: i32, activity: NewActivity) -> Result<Activity, AppError> {
        let activity = ActivityRepository::new(self.db)
            .create(user_id, activity, Utc::now())
            .await?;

        Ok(activity)
    }

    /// Deletes one of the user's entries.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No entry with that id belongs to the user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        if !ActivityRepository::new(self.db).delete(id, user_id).await? {
            return Err(AppError::NotFound("Activity not found".to_string()));
        }

        Ok(())
    }
}
