use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceDirectory::Table)
                    .if_not_exists()
                    .col(pk_auto(ResourceDirectory::Id))
                    .col(string(ResourceDirectory::CourseCode))
                    .col(string(ResourceDirectory::CourseName).default(""))
                    .col(string(ResourceDirectory::Title))
                    .col(integer_null(ResourceDirectory::OwnerId))
                    .col(string(ResourceDirectory::Visibility).default("private"))
                    .col(integer_null(ResourceDirectory::ParentId))
                    .col(string_null(ResourceDirectory::SubdirectoryKind))
                    .col(string_null(ResourceDirectory::SystemKey).unique_key())
                    .col(
                        timestamp(ResourceDirectory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ResourceDirectory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_directory_owner_id")
                            .from(ResourceDirectory::Table, ResourceDirectory::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_directory_parent_id")
                            .from(ResourceDirectory::Table, ResourceDirectory::ParentId)
                            .to(ResourceDirectory::Table, ResourceDirectory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resource_directory_course_code")
                    .table(ResourceDirectory::Table)
                    .col(ResourceDirectory::CourseCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResourceDirectory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResourceDirectory {
    Table,
    Id,
    CourseCode,
    CourseName,
    Title,
    OwnerId,
    Visibility,
    ParentId,
    SubdirectoryKind,
    SystemKey,
    CreatedAt,
    UpdatedAt,
}
