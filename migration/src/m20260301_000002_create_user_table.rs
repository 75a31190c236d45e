use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::ExternalId))
                    .col(string(User::Name))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::StudentId))
                    .col(string(User::PictureUrl).default(""))
                    .col(string_null(User::Phone))
                    .col(text_null(User::Bio))
                    .col(date_null(User::DateOfBirth))
                    .col(string_null(User::BloodGroup))
                    .col(string_null(User::Address))
                    .col(string_null(User::Department))
                    .col(string_null(User::School))
                    .col(string_null(User::College))
                    .col(string_null(User::Linkedin))
                    .col(string_null(User::Github))
                    .col(string_null(User::Facebook))
                    .col(string_null(User::Instagram))
                    .col(string_null(User::Snapchat))
                    .col(string_null(User::Twitter))
                    .col(string_null(User::Website))
                    .col(string_null(User::Youtube))
                    .col(string(User::ThemeColor).default("blue"))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(integer_null(User::AdminClubId))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_admin_club_id")
                            .from(User::Table, User::AdminClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    ExternalId,
    Name,
    Username,
    Email,
    StudentId,
    PictureUrl,
    Phone,
    Bio,
    DateOfBirth,
    BloodGroup,
    Address,
    Department,
    School,
    College,
    Linkedin,
    Github,
    Facebook,
    Instagram,
    Snapchat,
    Twitter,
    Website,
    Youtube,
    ThemeColor,
    IsAdmin,
    AdminClubId,
    CreatedAt,
    UpdatedAt,
}
