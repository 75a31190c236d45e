use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deadline_vote")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub deadline_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    /// `true` for agree, `false` for disagree.
    pub agree: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deadline::Entity",
        from = "Column::DeadlineId",
        to = "super::deadline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Deadline,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::deadline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deadline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
