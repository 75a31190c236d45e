use sea_orm::entity::prelude::*;

/// Per-user denormalized copy of a deadline.
///
/// Written by fan-out whenever the canonical `deadline` row is created, edited
/// or deleted. `completed` is the only column owned by the user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_deadline")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub deadline_id: String,
    pub course_id: i32,
    pub course_code: String,
    pub course_name: String,
    pub section: String,
    pub kind: String,
    pub title: String,
    pub details: String,
    pub submission_link: Option<String>,
    pub last_date: DateTimeUtc,
    pub created_by_name: String,
    pub completed: bool,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::deadline::Entity",
        from = "Column::DeadlineId",
        to = "super::deadline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Deadline,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::deadline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deadline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
