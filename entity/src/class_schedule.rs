use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub section_id: i32,
    /// `theory` or `lab`
    pub kind: String,
    pub faculty: String,
    pub details: String,
    /// Comma separated weekday names.
    pub days: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_section::Entity",
        from = "Column::SectionId",
        to = "super::course_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CourseSection,
}

impl Related<super::course_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
