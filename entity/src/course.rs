use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub course_code: String,
    pub course_name: String,
    pub link: Option<String>,
    pub exam_day: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_section::Entity")]
    CourseSection,
}

impl Related<super::course_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
