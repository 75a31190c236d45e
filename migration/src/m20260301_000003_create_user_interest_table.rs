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
                    .table(UserInterest::Table)
                    .if_not_exists()
                    .col(integer(UserInterest::UserId))
                    .col(string(UserInterest::Interest))
                    .col(integer(UserInterest::Position).default(0))
                    .primary_key(
                        Index::create()
                            .col(UserInterest::UserId)
                            .col(UserInterest::Interest),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interest_user_id")
                            .from(UserInterest::Table, UserInterest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInterest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserInterest {
    Table,
    UserId,
    Interest,
    Position,
}
