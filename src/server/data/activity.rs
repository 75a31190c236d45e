use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::activity::{Activity, ActivityFilter, NewActivity},
    util::page::clamp_page,
};

/// Append-only log of user actions.
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        activity: NewActivity,
        now: DateTime<Utc>,
    ) -> Result<Activity, DbErr> {
        let entity = entity::activity::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            action: ActiveValue::Set(activity.action),
            resource_type: ActiveValue::Set(activity.resource_type),
            resource_id: ActiveValue::Set(activity.resource_id),
            title: ActiveValue::Set(activity.title),
            description: ActiveValue::Set(activity.description),
            metadata: ActiveValue::Set(activity.metadata.map(|metadata| metadata.to_string())),
            visibility: ActiveValue::Set(activity.visibility.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity))
    }

    /// One page of the user's entries, newest first.
    ///
    /// # Returns
    /// - `Ok((activities, total))` - The page and the number of matching entries
    pub async fn get_paginated(
        &self,
        user_id: i32,
        filter: &ActivityFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Activity>, u64), DbErr> {
        let mut select = entity::prelude::Activity::find()
            .filter(entity::activity::Column::UserId.eq(user_id));
        if let Some(action) = &filter.action {
            select = select.filter(entity::activity::Column::Action.eq(action.as_str()));
        }
        if let Some(resource_type) = &filter.resource_type {
            select = select.filter(entity::activity::Column::ResourceType.eq(resource_type.as_str()));
        }

        let paginator = select
            .order_by_desc(entity::activity::Column::CreatedAt)
            .order_by_desc(entity::activity::Column::Id)
            .paginate(self.db, limit.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(clamp_page(page) - 1).await?;

        Ok((rows.into_iter().map(Activity::from_entity).collect(), total))
    }

    /// Number of entries per action over all of the user's log, largest first.
    pub async fn count_by_action(&self, user_id: i32) -> Result<Vec<(String, u64)>, DbErr> {
        let actions: Vec<String> = entity::prelude::Activity::find()
            .select_only()
            .column(entity::activity::Column::Action)
            .filter(entity::activity::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: Vec<(String, u64)> = Vec::new();
        for action in actions {
            match counts.iter_mut().find(|(existing, _)| *existing == action) {
                Some((_, count)) => *count += 1,
                None => counts.push((action, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(counts)
    }

    /// Deletes one of the user's entries.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry belonged to the user and was deleted
    /// - `Ok(false)` - No such entry for this user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Activity::delete_many()
            .filter(entity::activity::Column::Id.eq(id))
            .filter(entity::activity::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
