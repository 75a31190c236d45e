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
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(integer(Activity::UserId))
                    .col(string(Activity::Action))
                    .col(string_null(Activity::ResourceType))
                    .col(string_null(Activity::ResourceId))
                    .col(string(Activity::Title))
                    .col(text_null(Activity::Description))
                    .col(text_null(Activity::Metadata))
                    .col(string(Activity::Visibility).default("private"))
                    .col(
                        timestamp(Activity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_user_id")
                            .from(Activity::Table, Activity::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_user_id_created_at")
                    .table(Activity::Table)
                    .col(Activity::UserId)
                    .col(Activity::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    UserId,
    Action,
    ResourceType,
    ResourceId,
    Title,
    Description,
    Metadata,
    Visibility,
    CreatedAt,
}
