use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260308_000019_create_resource_directory_table::ResourceDirectory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(string(Resource::CourseCode))
                    .col(string(Resource::CourseName).default(""))
                    .col(integer_null(Resource::DirectoryId))
                    .col(string(Resource::Title))
                    .col(text_null(Resource::Description))
                    .col(string(Resource::Kind))
                    .col(string(Resource::Url))
                    .col(string_null(Resource::Mime))
                    .col(big_integer_null(Resource::Bytes))
                    .col(string_null(Resource::Provider))
                    .col(string_null(Resource::StoragePath))
                    .col(string_null(Resource::OriginalName))
                    .col(string_null(Resource::VideoId))
                    .col(integer_null(Resource::OwnerId))
                    .col(string(Resource::Visibility).default("private"))
                    .col(boolean(Resource::InheritVisibility).default(true))
                    .col(
                        timestamp(Resource::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Resource::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_directory_id")
                            .from(Resource::Table, Resource::DirectoryId)
                            .to(ResourceDirectory::Table, ResourceDirectory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_owner_id")
                            .from(Resource::Table, Resource::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resource_course_code")
                    .table(Resource::Table)
                    .col(Resource::CourseCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    CourseCode,
    CourseName,
    DirectoryId,
    Title,
    Description,
    Kind,
    Url,
    Mime,
    Bytes,
    Provider,
    StoragePath,
    OriginalName,
    VideoId,
    OwnerId,
    Visibility,
    InheritVisibility,
    CreatedAt,
    UpdatedAt,
}
