//! Resource directories.
//!
//! Two kinds of directory share the table. System directories have no owner, are public
//! and are created on demand per course, with optional `Theory`/`Lab` subdirectories.
//! User directories are owned and either `private` or `connections`-scoped.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    model::{
        course::ClassKind,
        resource::{CreateDirectoryParam, Directory, DirectoryQuery, DirectorySort, Visibility},
    },
    util::page::clamp_page,
};

pub struct DirectoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Directory>, DbErr> {
        entity::prelude::ResourceDirectory::find_by_id(id)
            .one(self.db)
            .await?
            .map(Directory::from_entity)
            .transpose()
    }

    /// Directories with the given ids, keyed by id.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Directory>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| Directory::from_entity(entity).map(|directory| (directory.id, directory)))
            .collect()
    }

    /// Every system directory, main and sub.
    pub async fn get_system(&self) -> Result<Vec<Directory>, DbErr> {
        entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::OwnerId.is_null())
            .order_by_asc(entity::resource_directory::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Directory::from_entity)
            .collect()
    }

    /// Creates a public system directory unless the same one already exists.
    ///
    /// System directories are unique on their key, so concurrent callers end up sharing
    /// a single row.
    ///
    /// # Arguments
    /// - `course_code` / `course_name` - Course the directory belongs to
    /// - `parent` - Main directory and subdirectory kind, for `Theory`/`Lab` children
    ///
    /// # Returns
    /// - `Ok((Directory, true))` - The directory was created by this call
    /// - `Ok((Directory, false))` - It already existed
    pub async fn create_system(
        &self,
        course_code: &str,
        course_name: &str,
        parent: Option<(i32, ClassKind)>,
        now: DateTime<Utc>,
    ) -> Result<(Directory, bool), DbErr> {
        let course_code = course_code.to_uppercase();
        let key = system_key(&course_code, parent.map(|(_, kind)| kind));
        let title = match parent {
            Some((_, kind)) => kind.label().to_string(),
            None => course_code.clone(),
        };

        let inserted = entity::prelude::ResourceDirectory::insert(
            entity::resource_directory::ActiveModel {
                course_code: ActiveValue::Set(course_code),
                course_name: ActiveValue::Set(course_name.to_string()),
                title: ActiveValue::Set(title),
                owner_id: ActiveValue::Set(None),
                visibility: ActiveValue::Set(Visibility::Public.as_str().to_string()),
                parent_id: ActiveValue::Set(parent.map(|(id, _)| id)),
                subdirectory_kind: ActiveValue::Set(
                    parent.map(|(_, kind)| kind.as_str().to_string()),
                ),
                system_key: ActiveValue::Set(Some(key.clone())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::resource_directory::Column::SystemKey)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let entity = entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::SystemKey.eq(key.as_str()))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("system directory {}", key)))?;

        Ok((Directory::from_entity(entity)?, inserted > 0))
    }

    /// Children of a directory, theory before lab.
    pub async fn get_subdirectories(&self, parent_id: i32) -> Result<Vec<Directory>, DbErr> {
        entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::ParentId.eq(parent_id))
            .order_by_desc(entity::resource_directory::Column::SubdirectoryKind)
            .all(self.db)
            .await?
            .into_iter()
            .map(Directory::from_entity)
            .collect()
    }

    /// One page of public main directories.
    ///
    /// # Returns
    /// - `Ok((directories, total))` - The page and the number of matches overall
    pub async fn get_public_paginated(
        &self,
        query: &DirectoryQuery,
    ) -> Result<(Vec<Directory>, u64), DbErr> {
        let select = entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::Visibility.eq(Visibility::Public.as_str()))
            .filter(entity::resource_directory::Column::ParentId.is_null());

        self.paginate(select, query).await
    }

    /// One page of the owner's private and connections-scoped directories.
    pub async fn get_owned_paginated(
        &self,
        owner_id: i32,
        query: &DirectoryQuery,
    ) -> Result<(Vec<Directory>, u64), DbErr> {
        let select = entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::OwnerId.eq(owner_id))
            .filter(entity::resource_directory::Column::Visibility.ne(Visibility::Public.as_str()));

        self.paginate(select, query).await
    }

    /// Every directory the user owns, newest first.
    pub async fn get_owned_by(&self, owner_id: i32) -> Result<Vec<Directory>, DbErr> {
        entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::resource_directory::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Directory::from_entity)
            .collect()
    }

    pub async fn public_exists_for_code(&self, course_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::CourseCode.eq(course_code.to_uppercase()))
            .filter(entity::resource_directory::Column::Visibility.eq(Visibility::Public.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a user-owned directory.
    pub async fn create(
        &self,
        owner_id: i32,
        param: CreateDirectoryParam,
        now: DateTime<Utc>,
    ) -> Result<Directory, DbErr> {
        let entity = entity::resource_directory::ActiveModel {
            course_code: ActiveValue::Set(param.course_code),
            course_name: ActiveValue::Set(param.course_name),
            title: ActiveValue::Set(param.title),
            owner_id: ActiveValue::Set(Some(owner_id)),
            visibility: ActiveValue::Set(param.visibility.as_str().to_string()),
            parent_id: ActiveValue::Set(None),
            subdirectory_kind: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Directory::from_entity(entity)
    }

    pub async fn set_visibility(
        &self,
        id: i32,
        visibility: Visibility,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::ResourceDirectory::update_many()
            .set(entity::resource_directory::ActiveModel {
                visibility: ActiveValue::Set(visibility.as_str().to_string()),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::resource_directory::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a directory, its subdirectories and every resource inside them.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Storage paths of the deleted file resources
    pub async fn delete(&self, id: i32) -> Result<Vec<String>, DbErr> {
        let mut directory_ids: Vec<i32> = entity::prelude::ResourceDirectory::find()
            .filter(entity::resource_directory::Column::ParentId.eq(id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|directory| directory.id)
            .collect();
        directory_ids.push(id);

        let resources = entity::prelude::Resource::find()
            .filter(entity::resource::Column::DirectoryId.is_in(directory_ids.clone()))
            .all(self.db)
            .await?;
        let resource_ids: Vec<i32> = resources.iter().map(|resource| resource.id).collect();
        let storage_paths: Vec<String> = resources
            .into_iter()
            .filter_map(|resource| resource.storage_path)
            .collect();

        if !resource_ids.is_empty() {
            entity::prelude::ResourceVote::delete_many()
                .filter(entity::resource_vote::Column::ResourceId.is_in(resource_ids.clone()))
                .exec(self.db)
                .await?;
            entity::prelude::Resource::delete_many()
                .filter(entity::resource::Column::Id.is_in(resource_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::ResourceDirectory::delete_many()
            .filter(entity::resource_directory::Column::ParentId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::ResourceDirectory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(storage_paths)
    }

    async fn paginate(
        &self,
        mut select: Select<entity::prelude::ResourceDirectory>,
        query: &DirectoryQuery,
    ) -> Result<(Vec<Directory>, u64), DbErr> {
        if let Some(q) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(entity::resource_directory::Column::CourseCode.starts_with(q))
                    .add(entity::resource_directory::Column::CourseName.starts_with(q)),
            );
        }

        let select = match query.sort {
            DirectorySort::Newest => {
                select.order_by_desc(entity::resource_directory::Column::CreatedAt)
            }
            DirectorySort::Oldest => {
                select.order_by_asc(entity::resource_directory::Column::CreatedAt)
            }
            DirectorySort::CodeAsc => {
                select.order_by_asc(entity::resource_directory::Column::CourseCode)
            }
            DirectorySort::CodeDesc => {
                select.order_by_desc(entity::resource_directory::Column::CourseCode)
            }
            DirectorySort::TitleAsc => select.order_by_asc(entity::resource_directory::Column::Title),
            DirectorySort::TitleDesc => {
                select.order_by_desc(entity::resource_directory::Column::Title)
            }
        }
        .order_by_asc(entity::resource_directory::Column::Id);

        let paginator = select.paginate(self.db, query.limit.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(clamp_page(query.page) - 1).await?;

        let directories = rows
            .into_iter()
            .map(Directory::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((directories, total))
    }
}

/// Unique key of a system directory: the course code, plus the kind for a subdirectory.
fn system_key(course_code: &str, kind: Option<ClassKind>) -> String {
    match kind {
        Some(kind) => format!("{}:{}", course_code, kind.as_str()),
        None => course_code.to_string(),
    }
}
