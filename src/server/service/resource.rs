//! Shared resources.
//!
//! Visibility is decided per resource: `public` resources are visible to everyone,
//! `private` ones to their owner, `connections` ones to the owner and the owner's accepted
//! connections. A resource that inherits visibility uses its directory's instead.

use std::{cmp::Reverse, collections::HashMap};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        connection::ConnectionRepository, directory::DirectoryRepository,
        resource::ResourceRepository,
    },
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        resource::{
            CourseResources, Directory, NewResourceParam, Resource, ResourcePage, ResourceView,
            Visibility,
        },
        user::User,
        vote::{ResourceVoteAction, VoteTally},
    },
    service::{activity::ActivityService, directory::is_system_main, storage::StorageClient},
    util::page::clamp_page,
};

pub const BY_DIRECTORY_LIMIT: usize = 50;
pub const BY_COURSE_DEFAULT_LIMIT: u64 = 12;
pub const BY_COURSE_MAX_LIMIT: u64 = 50;

pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public resources grouped by course, courses in order of their newest upload.
    pub async fn get_public_grouped(&self, viewer_id: Option<i32>) -> Result<Vec<CourseResources>, AppError> {
        let resources = ResourceRepository::new(self.db).get_public().await?;
        let views = self.visible_views(resources, viewer_id).await?;

        let mut groups: Vec<CourseResources> = Vec::new();
        for view in views {
            match groups
                .iter_mut()
                .find(|group| group.course_code == view.resource.course_code)
            {
                Some(group) => group.resources.push(view),
                None => groups.push(CourseResources {
                    course_code: view.resource.course_code.clone(),
                    course_name: view.resource.course_name.clone(),
                    resources: vec![view],
                }),
            }
        }

        Ok(groups)
    }

    /// Stores an upload with the given visibility.
    ///
    /// Public uploads go into a public directory (or none). Private uploads go into one
    /// of the owner's directories, whose visibility they inherit.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The directory does not exist or is not usable
    /// - `Err(AppError::BadRequest)` - The directory is a main directory with subdirectories
    pub async fn create(
        &self,
        owner: &User,
        param: NewResourceParam,
        visibility: Visibility,
    ) -> Result<Resource, AppError> {
        let mut inherit_visibility = false;
        if let Some(directory_id) = param.directory_id {
            let repo = DirectoryRepository::new(self.db);
            let directory = repo
                .find_by_id(directory_id)
                .await?
                .filter(|directory| match visibility {
                    Visibility::Public => directory.visibility == Visibility::Public,
                    _ => directory.owner_id == Some(owner.id),
                })
                .ok_or_else(|| AppError::NotFound("Directory not found".to_string()))?;

            if !directory.is_subdirectory() && !repo.get_subdirectories(directory.id).await?.is_empty() {
                return Err(AppError::BadRequest(
                    "Upload into the Theory or Lab subdirectory instead".to_string(),
                ));
            }
            inherit_visibility = visibility != Visibility::Public;
        }

        let resource = ResourceRepository::new(self.db)
            .create(owner.id, param, visibility, inherit_visibility, Utc::now())
            .await?;

        ActivityService::new(self.db)
            .log(
                owner.id,
                NewActivity::new(
                    ActivityAction::ResourceUpload,
                    format!("Uploaded {}", resource.title),
                )
                .resource(ActivityResourceType::Resource, resource.id)
                .metadata(serde_json::json!({
                    "courseCode": resource.course_code,
                    "visibility": visibility.as_str(),
                })),
            )
            .await;

        Ok(resource)
    }

    /// Deletes a resource and its stored file.
    ///
    /// Only the owner may delete. Public rows without an owner predate ownership tracking
    /// and may be deleted by any registered user.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such resource
    /// - `Err(AppError::Forbidden)` - `owner_mismatch`
    pub async fn delete(
        &self,
        user: &User,
        id: i32,
        storage: &StorageClient<'_>,
        bucket: &str,
    ) -> Result<(), AppError> {
        let repo = ResourceRepository::new(self.db);
        let resource = repo.find_by_id(id).await?.ok_or_else(resource_not_found)?;

        let may_delete = match resource.owner_id {
            Some(owner_id) => owner_id == user.id,
            None => resource.visibility == Visibility::Public,
        };
        if !may_delete {
            return Err(AppError::Forbidden("owner_mismatch".to_string()));
        }

        repo.delete(id).await?;

        if let Some(path) = &resource.storage_path {
            storage
                .remove_best_effort(bucket, std::slice::from_ref(path))
                .await;
        }

        ActivityService::new(self.db)
            .log(
                user.id,
                NewActivity::new(
                    ActivityAction::ResourceDeleted,
                    format!("Deleted {}", resource.title),
                )
                .resource(ActivityResourceType::Resource, resource.id),
            )
            .await;

        Ok(())
    }

    /// Resources of a public directory, most upvoted first.
    ///
    /// A subdirectory lists its own resources. A system main directory also lists the
    /// course's public resources uploaded without a directory.
    pub async fn get_public_by_directory(
        &self,
        directory_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<ResourceView>, AppError> {
        let directory = DirectoryRepository::new(self.db)
            .find_by_id(directory_id)
            .await?
            .filter(|directory| directory.visibility == Visibility::Public)
            .ok_or_else(|| AppError::NotFound("Directory not found".to_string()))?;

        let repo = ResourceRepository::new(self.db);
        let mut resources = repo.get_in_directory(directory.id).await?;
        if is_system_main(&directory) {
            resources.extend(repo.get_unfiled_for_course(&directory.course_code).await?);
        }

        let mut views = self.visible_views(resources, viewer_id).await?;
        sort_by_votes(&mut views);
        views.truncate(BY_DIRECTORY_LIMIT);

        Ok(views)
    }

    /// One page of a course's public resources, newest first.
    pub async fn get_public_by_course(
        &self,
        course_code: &str,
        q: Option<&str>,
        page: u64,
        limit: u64,
        viewer_id: Option<i32>,
    ) -> Result<ResourcePage, AppError> {
        let page = clamp_page(page);
        let limit = limit.clamp(1, BY_COURSE_MAX_LIMIT);

        let (resources, total) = ResourceRepository::new(self.db)
            .get_public_by_course_paginated(&course_code.trim().to_uppercase(), q, page, limit)
            .await?;

        Ok(ResourcePage {
            items: self.views(resources, viewer_id).await?,
            page,
            limit,
            total,
        })
    }

    /// The owner's private uploads, newest first.
    pub async fn get_private(&self, owner_id: i32) -> Result<Vec<ResourceView>, AppError> {
        let resources = ResourceRepository::new(self.db)
            .get_owned(owner_id, Visibility::Private)
            .await?;

        self.views(resources, Some(owner_id)).await
    }

    /// Resources of a user directory the viewer may see, newest first.
    pub async fn get_private_by_directory(
        &self,
        directory_id: i32,
        viewer_id: i32,
    ) -> Result<Vec<ResourceView>, AppError> {
        let directory = DirectoryRepository::new(self.db)
            .find_by_id(directory_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Directory not found".to_string()))?;

        if !self.allows(directory.visibility, directory.owner_id, Some(viewer_id)).await? {
            return Err(AppError::NotFound("Directory not found".to_string()));
        }

        let resources = ResourceRepository::new(self.db)
            .get_in_directory(directory.id)
            .await?;

        self.visible_views(resources, Some(viewer_id)).await
    }

    /// Applies an up/down/clear vote to a resource the voter can see.
    ///
    /// # Returns
    /// - `Ok(VoteTally)` - The tally after the vote
    /// - `Err(AppError::NotFound)` - Missing or invisible resource
    pub async fn vote(
        &self,
        voter_id: i32,
        id: i32,
        action: ResourceVoteAction,
    ) -> Result<VoteTally, AppError> {
        let repo = ResourceRepository::new(self.db);
        let resource = repo.find_by_id(id).await?.ok_or_else(resource_not_found)?;
        if !self.can_view(&resource, Some(voter_id)).await? {
            return Err(resource_not_found());
        }

        match action {
            ResourceVoteAction::Up => repo.set_vote(id, voter_id, true).await?,
            ResourceVoteAction::Down => repo.set_vote(id, voter_id, false).await?,
            ResourceVoteAction::Clear => repo.clear_vote(id, voter_id).await?,
        }

        let votes = repo.get_votes(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(VoteTally::from_votes(votes, Some(voter_id)))
    }

    /// Whether `viewer_id` may see the resource under its effective visibility.
    pub async fn can_view(&self, resource: &Resource, viewer_id: Option<i32>) -> Result<bool, AppError> {
        let directory = match resource.directory_id {
            Some(id) => DirectoryRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };
        let visibility = resource.effective_visibility(directory.as_ref());

        self.allows(visibility, resource.owner_id, viewer_id).await
    }

    async fn allows(
        &self,
        visibility: Visibility,
        owner_id: Option<i32>,
        viewer_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let is_connected = match (visibility, owner_id, viewer_id) {
            (Visibility::Connections, Some(owner), Some(viewer)) if owner != viewer => {
                ConnectionRepository::new(self.db)
                    .is_connected(owner, viewer)
                    .await?
            }
            _ => false,
        };

        Ok(visibility.allows(owner_id, viewer_id, is_connected))
    }

    /// Builds views, dropping resources the viewer may not see.
    async fn visible_views(
        &self,
        resources: Vec<Resource>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<ResourceView>, AppError> {
        let views = self.views(resources, viewer_id).await?;

        let mut connected: HashMap<i32, bool> = HashMap::new();
        let mut visible = Vec::with_capacity(views.len());
        for view in views {
            let is_connected = match (view.visibility, view.resource.owner_id, viewer_id) {
                (Visibility::Connections, Some(owner), Some(viewer)) if owner != viewer => {
                    match connected.get(&owner) {
                        Some(known) => *known,
                        None => {
                            let known = ConnectionRepository::new(self.db)
                                .is_connected(owner, viewer)
                                .await?;
                            connected.insert(owner, known);
                            known
                        }
                    }
                }
                _ => false,
            };

            if view
                .visibility
                .allows(view.resource.owner_id, viewer_id, is_connected)
            {
                visible.push(view);
            }
        }

        Ok(visible)
    }

    /// Attaches effective visibility and vote tallies.
    async fn views(
        &self,
        resources: Vec<Resource>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<ResourceView>, AppError> {
        let directory_ids: Vec<i32> = resources.iter().filter_map(|r| r.directory_id).collect();
        let directories: HashMap<i32, Directory> = DirectoryRepository::new(self.db)
            .find_by_ids(&directory_ids)
            .await?;

        let ids: Vec<i32> = resources.iter().map(|resource| resource.id).collect();
        let mut votes = ResourceRepository::new(self.db).get_votes(&ids).await?;

        Ok(resources
            .into_iter()
            .map(|resource| {
                let directory = resource.directory_id.and_then(|id| directories.get(&id));
                ResourceView {
                    visibility: resource.effective_visibility(directory),
                    votes: VoteTally::from_votes(
                        votes.remove(&resource.id).unwrap_or_default(),
                        viewer_id,
                    ),
                    resource,
                }
            })
            .collect())
    }
}

/// Orders by upvotes, then score, then newest.
pub fn sort_by_votes(views: &mut [ResourceView]) {
    views.sort_by_key(|view| {
        (
            Reverse(view.votes.positive),
            Reverse(view.votes.score()),
            Reverse(view.resource.created_at),
        )
    });
}

fn resource_not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
