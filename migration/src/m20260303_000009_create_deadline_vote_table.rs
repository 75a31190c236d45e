use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260303_000008_create_deadline_table::Deadline,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeadlineVote::Table)
                    .if_not_exists()
                    .col(string(DeadlineVote::DeadlineId))
                    .col(integer(DeadlineVote::UserId))
                    .col(boolean(DeadlineVote::Agree))
                    .primary_key(
                        Index::create()
                            .col(DeadlineVote::DeadlineId)
                            .col(DeadlineVote::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deadline_vote_deadline_id")
                            .from(DeadlineVote::Table, DeadlineVote::DeadlineId)
                            .to(Deadline::Table, Deadline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deadline_vote_user_id")
                            .from(DeadlineVote::Table, DeadlineVote::UserId)
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
            .drop_table(Table::drop().table(DeadlineVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeadlineVote {
    Table,
    DeadlineId,
    UserId,
    Agree,
}
