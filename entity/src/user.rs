use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Opaque user id issued by the identity provider.
    #[sea_orm(unique)]
    pub external_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub student_id: String,
    pub picture_url: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub date_of_birth: Option<Date>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub snapchat: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
    pub theme_color: String,
    pub is_admin: bool,
    pub admin_club_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::AdminClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Club,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "super::user_interest::Entity")]
    UserInterest,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::user_interest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserInterest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
