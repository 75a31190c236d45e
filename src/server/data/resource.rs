//! Shared course resources (files and YouTube links) and their up/down votes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::resource::{NewResourceParam, Resource, Visibility},
    util::page::clamp_page,
};

pub struct ResourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a resource.
    ///
    /// # Arguments
    /// - `owner_id` - Uploader
    /// - `param` - Validated upload
    /// - `visibility` - Visibility stored on the row
    /// - `inherit_visibility` - Whether the directory's visibility overrides the row's
    pub async fn create(
        &self,
        owner_id: i32,
        param: NewResourceParam,
        visibility: Visibility,
        inherit_visibility: bool,
        now: DateTime<Utc>,
    ) -> Result<Resource, DbErr> {
        let entity = entity::resource::ActiveModel {
            course_code: ActiveValue::Set(param.course_code),
            course_name: ActiveValue::Set(param.course_name),
            directory_id: ActiveValue::Set(param.directory_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            url: ActiveValue::Set(param.url),
            mime: ActiveValue::Set(param.mime),
            bytes: ActiveValue::Set(param.bytes),
            provider: ActiveValue::Set(param.provider),
            storage_path: ActiveValue::Set(param.storage_path),
            original_name: ActiveValue::Set(param.original_name),
            video_id: ActiveValue::Set(param.video_id),
            owner_id: ActiveValue::Set(Some(owner_id)),
            visibility: ActiveValue::Set(visibility.as_str().to_string()),
            inherit_visibility: ActiveValue::Set(inherit_visibility),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Resource::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Resource>, DbErr> {
        entity::prelude::Resource::find_by_id(id)
            .one(self.db)
            .await?
            .map(Resource::from_entity)
            .transpose()
    }

    /// Deletes a resource and its votes.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ResourceVote::delete_many()
            .filter(entity::resource_vote::Column::ResourceId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Resource::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// All resources stored as public, newest first.
    pub async fn get_public(&self) -> Result<Vec<Resource>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::Visibility.eq(Visibility::Public.as_str()))
            .order_by_desc(entity::resource::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from_entity)
            .collect()
    }

    /// Resources filed in a directory, newest first.
    pub async fn get_in_directory(&self, directory_id: i32) -> Result<Vec<Resource>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::DirectoryId.eq(directory_id))
            .order_by_desc(entity::resource::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from_entity)
            .collect()
    }

    /// Public resources of a course that were uploaded without a directory.
    pub async fn get_unfiled_for_course(&self, course_code: &str) -> Result<Vec<Resource>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::CourseCode.eq(course_code))
            .filter(entity::resource::Column::DirectoryId.is_null())
            .filter(entity::resource::Column::Visibility.eq(Visibility::Public.as_str()))
            .order_by_desc(entity::resource::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from_entity)
            .collect()
    }

    /// One page of a course's public resources, newest first.
    ///
    /// # Arguments
    /// - `course_code` - Uppercase course code
    /// - `q` - Optional text matched anywhere in title or description
    /// - `page` - 1-based page number
    /// - `limit` - Page size
    pub async fn get_public_by_course_paginated(
        &self,
        course_code: &str,
        q: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Resource>, u64), DbErr> {
        let mut select = entity::prelude::Resource::find()
            .filter(entity::resource::Column::CourseCode.eq(course_code))
            .filter(entity::resource::Column::Visibility.eq(Visibility::Public.as_str()));

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(entity::resource::Column::Title.contains(q))
                    .add(entity::resource::Column::Description.contains(q)),
            );
        }

        let paginator = select
            .order_by_desc(entity::resource::Column::CreatedAt)
            .order_by_desc(entity::resource::Column::Id)
            .paginate(self.db, limit.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(clamp_page(page) - 1).await?;

        let resources = rows
            .into_iter()
            .map(Resource::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((resources, total))
    }

    /// The owner's resources stored with the given visibility, newest first.
    pub async fn get_owned(
        &self,
        owner_id: i32,
        visibility: Visibility,
    ) -> Result<Vec<Resource>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::OwnerId.eq(owner_id))
            .filter(entity::resource::Column::Visibility.eq(visibility.as_str()))
            .order_by_desc(entity::resource::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from_entity)
            .collect()
    }

    /// Number of resources filed in each of the given directories.
    pub async fn count_by_directory(&self, directory_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts: HashMap<i32, u64> = HashMap::new();
        if directory_ids.is_empty() {
            return Ok(counts);
        }

        let rows: Vec<Option<i32>> = entity::prelude::Resource::find()
            .select_only()
            .column(entity::resource::Column::DirectoryId)
            .filter(entity::resource::Column::DirectoryId.is_in(directory_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        for directory_id in rows.into_iter().flatten() {
            *counts.entry(directory_id).or_default() += 1;
        }

        Ok(counts)
    }

    /// Number of unfiled public resources for each of the given course codes.
    pub async fn count_unfiled_by_course(
        &self,
        course_codes: &[String],
    ) -> Result<HashMap<String, u64>, DbErr> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        if course_codes.is_empty() {
            return Ok(counts);
        }

        let rows: Vec<String> = entity::prelude::Resource::find()
            .select_only()
            .column(entity::resource::Column::CourseCode)
            .filter(entity::resource::Column::CourseCode.is_in(course_codes.to_vec()))
            .filter(entity::resource::Column::DirectoryId.is_null())
            .filter(entity::resource::Column::Visibility.eq(Visibility::Public.as_str()))
            .into_tuple()
            .all(self.db)
            .await?;

        for course_code in rows {
            *counts.entry(course_code).or_default() += 1;
        }

        Ok(counts)
    }

    /// Votes on the given resources as `(user_id, up)` pairs keyed by resource id.
    pub async fn get_votes(&self, ids: &[i32]) -> Result<HashMap<i32, Vec<(i32, bool)>>, DbErr> {
        let mut votes: HashMap<i32, Vec<(i32, bool)>> = HashMap::new();
        if ids.is_empty() {
            return Ok(votes);
        }

        for vote in entity::prelude::ResourceVote::find()
            .filter(entity::resource_vote::Column::ResourceId.is_in(ids.to_vec()))
            .all(self.db)
            .await?
        {
            votes
                .entry(vote.resource_id)
                .or_default()
                .push((vote.user_id, vote.up));
        }

        Ok(votes)
    }

    /// Records an up or down vote, replacing the opposite one.
    pub async fn set_vote(&self, resource_id: i32, user_id: i32, up: bool) -> Result<(), DbErr> {
        entity::prelude::ResourceVote::insert(entity::resource_vote::ActiveModel {
            resource_id: ActiveValue::Set(resource_id),
            user_id: ActiveValue::Set(user_id),
            up: ActiveValue::Set(up),
        })
        .on_conflict(
            OnConflict::columns([
                entity::resource_vote::Column::ResourceId,
                entity::resource_vote::Column::UserId,
            ])
            .update_column(entity::resource_vote::Column::Up)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn clear_vote(&self, resource_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::ResourceVote::delete_many()
            .filter(entity::resource_vote::Column::ResourceId.eq(resource_id))
            .filter(entity::resource_vote::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
