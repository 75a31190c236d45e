use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_directory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Always stored uppercase.
    pub course_code: String,
    pub course_name: String,
    pub title: String,
    /// `None` for system directories created on demand per course.
    pub owner_id: Option<i32>,
    /// `public`, `private` or `connections`
    pub visibility: String,
    pub parent_id: Option<i32>,
    /// `theory` or `lab` for subdirectories.
    pub subdirectory_kind: Option<String>,
    /// Set only on system directories: the course code for a main directory,
    /// `{course_code}:{kind}` for a subdirectory.
    #[sea_orm(unique)]
    pub system_key: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(has_many = "super::resource::Entity")]
    Resource,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
