use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub directory_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    /// `file` or `youtube`
    pub kind: String,
    pub url: String,
    pub mime: Option<String>,
    pub bytes: Option<i64>,
    pub provider: Option<String>,
    /// Object path inside the storage bucket, for file resources.
    pub storage_path: Option<String>,
    pub original_name: Option<String>,
    pub video_id: Option<String>,
    /// `None` only for legacy rows.
    pub owner_id: Option<i32>,
    pub visibility: String,
    pub inherit_visibility: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource_directory::Entity",
        from = "Column::DirectoryId",
        to = "super::resource_directory::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ResourceDirectory,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Owner,
    #[sea_orm(has_many = "super::resource_vote::Entity")]
    ResourceVote,
}

impl Related<super::resource_directory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceDirectory.def()
    }
}

impl Related<super::resource_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceVote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
