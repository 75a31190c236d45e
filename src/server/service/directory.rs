//! Resource directories: the public per-course tree and users' own directories.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        connection::ConnectionRepository, course::CourseRepository, directory::DirectoryRepository,
        resource::ResourceRepository,
    },
    error::AppError,
    model::{
        activity::{ActivityAction, ActivityResourceType, NewActivity},
        course::ClassKind,
        resource::{
            CreateDirectoryParam, Directory, DirectoryPage, DirectoryQuery, DirectoryValidation,
            DirectoryView, Visibility,
        },
    },
    service::{activity::ActivityService, storage::StorageClient},
};

pub const PUBLIC_DEFAULT_LIMIT: u64 = 50;
pub const PUBLIC_MAX_LIMIT: u64 = 100;
pub const PRIVATE_DEFAULT_LIMIT: u64 = 12;
pub const PRIVATE_MAX_LIMIT: u64 = 50;

pub struct DirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the missing system directories of every catalog course.
    ///
    /// Each course gets a public main directory; courses where any section has a lab
    /// also get `Theory` and `Lab` subdirectories. Safe to run concurrently: a
    /// directory another caller created in the meantime is reused.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of directories created
    pub async fn ensure_system_directories(&self) -> Result<usize, AppError> {
        let repo = DirectoryRepository::new(self.db);
        let courses = CourseRepository::new(self.db).get_all().await?;
        let existing = repo.get_system().await?;

        let mut mains: HashMap<String, i32> = existing
            .iter()
            .filter(|directory| !directory.is_subdirectory())
            .map(|directory| (directory.course_code.clone(), directory.id))
            .collect();
        let subs: HashSet<(i32, ClassKind)> = existing
            .iter()
            .filter_map(|directory| Some((directory.parent_id?, directory.subdirectory_kind?)))
            .collect();

        let now = Utc::now();
        let mut created = 0;
        for course in courses {
            let main_id = match mains.get(&course.course_code) {
                Some(id) => *id,
                None => {
                    let (main, inserted) = repo
                        .create_system(&course.course_code, &course.course_name, None, now)
                        .await?;
                    mains.insert(course.course_code.clone(), main.id);
                    created += usize::from(inserted);
                    main.id
                }
            };

            if !course.has_lab() {
                continue;
            }
            for kind in [ClassKind::Theory, ClassKind::Lab] {
                if !subs.contains(&(main_id, kind)) {
                    let (_, inserted) = repo
                        .create_system(
                            &course.course_code,
                            &course.course_name,
                            Some((main_id, kind)),
                            now,
                        )
                        .await?;
                    created += usize::from(inserted);
                }
            }
        }

        if created > 0 {
            tracing::info!("Created {} system resource directories", created);
        }

        Ok(created)
    }

    /// One page of public main directories with resource counts.
    pub async fn get_public_page(&self, query: DirectoryQuery) -> Result<DirectoryPage, AppError> {
        self.ensure_system_directories().await?;

        let (directories, total) = DirectoryRepository::new(self.db)
            .get_public_paginated(&query)
            .await?;

        Ok(DirectoryPage {
            items: self.with_counts(directories).await?,
            page: query.page,
            limit: query.limit,
            total,
        })
    }

    /// A public directory with its subdirectories.
    pub async fn get_public(&self, id: i32) -> Result<DirectoryView, AppError> {
        let directory = DirectoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|directory| directory.visibility == Visibility::Public)
            .ok_or_else(directory_not_found)?;

        self.with_subdirectories(directory).await
    }

    /// Checks that a course code exists in the catalog and, unless duplicates are
    /// ignored, that it has no public directory yet.
    pub async fn validate(
        &self,
        course_code: &str,
        ignore_duplicates: bool,
    ) -> Result<DirectoryValidation, AppError> {
        let course_code = course_code.trim().to_uppercase();
        if course_code.is_empty() {
            return Ok(DirectoryValidation::Invalid(
                "Course code is required".to_string(),
            ));
        }

        let Some(course) = CourseRepository::new(self.db)
            .find_by_code(&course_code)
            .await?
        else {
            return Ok(DirectoryValidation::Invalid(format!(
                "Course {} does not exist",
                course_code
            )));
        };

        if !ignore_duplicates
            && DirectoryRepository::new(self.db)
                .public_exists_for_code(&course_code)
                .await?
        {
            return Ok(DirectoryValidation::Invalid(format!(
                "A directory for {} already exists",
                course_code
            )));
        }

        Ok(DirectoryValidation::Valid {
            has_lab: course.has_lab(),
            course_name: course.course_name,
        })
    }

    /// One page of the owner's non-public directories.
    pub async fn get_private_page(
        &self,
        owner_id: i32,
        query: DirectoryQuery,
    ) -> Result<DirectoryPage, AppError> {
        let (directories, total) = DirectoryRepository::new(self.db)
            .get_owned_paginated(owner_id, &query)
            .await?;

        Ok(DirectoryPage {
            items: self.with_counts(directories).await?,
            page: query.page,
            limit: query.limit,
            total,
        })
    }

    /// Creates a directory owned by the user. A missing course name is taken from the
    /// catalog, falling back to the code.
    pub async fn create_private(
        &self,
        owner_id: i32,
        mut param: CreateDirectoryParam,
    ) -> Result<Directory, AppError> {
        if param.course_name.is_empty() {
            param.course_name = CourseRepository::new(self.db)
                .find_by_code(&param.course_code)
                .await?
                .map(|course| course.course_name)
                .unwrap_or_else(|| param.course_code.clone());
        }

        let directory = DirectoryRepository::new(self.db)
            .create(owner_id, param, Utc::now())
            .await?;

        ActivityService::new(self.db)
            .log(
                owner_id,
                NewActivity::new(
                    ActivityAction::DirectoryCreated,
                    format!("Created directory {}", directory.title),
                )
                .resource(ActivityResourceType::Directory, directory.id),
            )
            .await;

        Ok(directory)
    }

    /// A directory the user owns, with its resource count.
    pub async fn get_owned(&self, owner_id: i32, id: i32) -> Result<DirectoryView, AppError> {
        let directory = self.find_owned(owner_id, id).await?;

        self.with_subdirectories(directory).await
    }

    pub async fn set_visibility(
        &self,
        owner_id: i32,
        id: i32,
        visibility: Visibility,
    ) -> Result<Directory, AppError> {
        let repo = DirectoryRepository::new(self.db);
        let mut directory = self.find_owned(owner_id, id).await?;

        let now = Utc::now();
        repo.set_visibility(id, visibility, now).await?;
        directory.visibility = visibility;
        directory.updated_at = now;

        Ok(directory)
    }

    /// Deletes an owned directory with its resources, then their stored files.
    pub async fn delete_owned(
        &self,
        owner_id: i32,
        id: i32,
        storage: &StorageClient<'_>,
        bucket: &str,
    ) -> Result<(), AppError> {
        let directory = self.find_owned(owner_id, id).await?;

        let storage_paths = DirectoryRepository::new(self.db).delete(id).await?;
        storage.remove_best_effort(bucket, &storage_paths).await;

        ActivityService::new(self.db)
            .log(
                owner_id,
                NewActivity::new(
                    ActivityAction::DirectoryDeleted,
                    format!("Deleted directory {}", directory.title),
                )
                .resource(ActivityResourceType::Directory, directory.id),
            )
            .await;

        Ok(())
    }

    /// Directories owned by `owner_id` that `viewer_id` may see.
    pub async fn get_visible_owned_by(
        &self,
        viewer_id: i32,
        owner_id: i32,
    ) -> Result<Vec<DirectoryView>, AppError> {
        let is_connected = viewer_id != owner_id
            && ConnectionRepository::new(self.db)
                .is_connected(viewer_id, owner_id)
                .await?;

        let directories = DirectoryRepository::new(self.db)
            .get_owned_by(owner_id)
            .await?
            .into_iter()
            .filter(|directory| {
                !directory.is_subdirectory()
                    && directory
                        .visibility
                        .allows(directory.owner_id, Some(viewer_id), is_connected)
            })
            .collect();

        self.with_counts(directories).await
    }

    async fn find_owned(&self, owner_id: i32, id: i32) -> Result<Directory, AppError> {
        DirectoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|directory| directory.owner_id == Some(owner_id))
            .ok_or_else(directory_not_found)
    }

    async fn with_subdirectories(&self, directory: Directory) -> Result<DirectoryView, AppError> {
        let subdirectories = DirectoryRepository::new(self.db)
            .get_subdirectories(directory.id)
            .await?;
        let subdirectories = self.with_counts(subdirectories).await?;

        let mut view = self
            .with_counts(vec![directory])
            .await?
            .pop()
            .ok_or_else(directory_not_found)?;
        view.subdirectories = subdirectories;

        Ok(view)
    }

    /// Attaches resource counts. Ownerless main directories also count the course's
    /// public resources uploaded without a directory.
    async fn with_counts(&self, directories: Vec<Directory>) -> Result<Vec<DirectoryView>, AppError> {
        let resources = ResourceRepository::new(self.db);
        let ids: Vec<i32> = directories.iter().map(|directory| directory.id).collect();
        let counts = resources.count_by_directory(&ids).await?;

        let system_codes: Vec<String> = directories
            .iter()
            .filter(|directory| is_system_main(directory))
            .map(|directory| directory.course_code.clone())
            .collect();
        let unfiled = resources.count_unfiled_by_course(&system_codes).await?;

        Ok(directories
            .into_iter()
            .map(|directory| {
                let mut resource_count = counts.get(&directory.id).copied().unwrap_or_default();
                if is_system_main(&directory) {
                    resource_count += unfiled.get(&directory.course_code).copied().unwrap_or_default();
                }

                DirectoryView {
                    directory,
                    resource_count,
                    subdirectories: Vec::new(),
                }
            })
            .collect())
    }
}

/// Ownerless top-level directory, the home of a course's unfiled public resources.
pub fn is_system_main(directory: &Directory) -> bool {
    directory.owner_id.is_none() && !directory.is_subdirectory()
}

fn directory_not_found() -> AppError {
    AppError::NotFound("Directory not found".to_string())
}
