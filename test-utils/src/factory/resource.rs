//! Resource directory and resource factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DirectoryFactory<'a> {
    db: &'a DatabaseConnection,
    course_code: String,
    title: String,
    owner_id: Option<i32>,
    visibility: String,
    parent_id: Option<i32>,
    subdirectory_kind: Option<String>,
}

impl<'a> DirectoryFactory<'a> {
    /// Defaults to a public system directory for `course_code`.
    pub fn new(db: &'a DatabaseConnection, course_code: &str) -> Self {
        Self {
            db,
            course_code: course_code.to_string(),
            title: format!("Directory {}", next_id()),
            owner_id: None,
            visibility: "public".to_string(),
            parent_id: None,
            subdirectory_kind: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Makes this a `theory` or `lab` subdirectory of `parent_id`.
    pub fn subdirectory_of(mut self, parent_id: i32, kind: &str) -> Self {
        self.parent_id = Some(parent_id);
        self.subdirectory_kind = Some(kind.to_string());
        self
    }

    pub async fn build(self) -> Result<entity::resource_directory::Model, DbErr> {
        let now = Utc::now();
        entity::resource_directory::ActiveModel {
            course_code: ActiveValue::Set(self.course_code),
            course_name: ActiveValue::Set(String::new()),
            title: ActiveValue::Set(self.title),
            owner_id: ActiveValue::Set(self.owner_id),
            visibility: ActiveValue::Set(self.visibility),
            parent_id: ActiveValue::Set(self.parent_id),
            subdirectory_kind: ActiveValue::Set(self.subdirectory_kind),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub struct ResourceFactory<'a> {
    db: &'a DatabaseConnection,
    course_code: String,
    directory_id: Option<i32>,
    owner_id: Option<i32>,
    title: String,
    visibility: String,
    inherit_visibility: bool,
}

impl<'a> ResourceFactory<'a> {
    /// Defaults to a public PDF link with no directory and no owner.
    pub fn new(db: &'a DatabaseConnection, course_code: &str) -> Self {
        Self {
            db,
            course_code: course_code.to_string(),
            directory_id: None,
            owner_id: None,
            title: format!("Notes {}", next_id()),
            visibility: "public".to_string(),
            inherit_visibility: false,
        }
    }

    pub fn directory(mut self, directory_id: i32) -> Self {
        self.directory_id = Some(directory_id);
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    pub fn inherit_visibility(mut self, inherit: bool) -> Self {
        self.inherit_visibility = inherit;
        self
    }

    pub async fn build(self) -> Result<entity::resource::Model, DbErr> {
        let now = Utc::now();
        entity::resource::ActiveModel {
            course_code: ActiveValue::Set(self.course_code),
            course_name: ActiveValue::Set(String::new()),
            directory_id: ActiveValue::Set(self.directory_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            kind: ActiveValue::Set("file".to_string()),
            url: ActiveValue::Set("https://files.example.com/notes.pdf".to_string()),
            mime: ActiveValue::Set(Some("application/pdf".to_string())),
            bytes: ActiveValue::Set(Some(2048)),
            provider: ActiveValue::Set(Some("storage".to_string())),
            storage_path: ActiveValue::Set(None),
            original_name: ActiveValue::Set(Some("notes.pdf".to_string())),
            video_id: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(self.owner_id),
            visibility: ActiveValue::Set(self.visibility),
            inherit_visibility: ActiveValue::Set(self.inherit_visibility),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
