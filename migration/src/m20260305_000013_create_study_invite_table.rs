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
                    .table(StudyInvite::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyInvite::Id))
                    .col(integer(StudyInvite::UserId))
                    .col(integer(StudyInvite::HostId))
                    .col(string(StudyInvite::RoomSlug))
                    .col(boolean(StudyInvite::Active).default(true))
                    .col(
                        timestamp(StudyInvite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_invite_user_id")
                            .from(StudyInvite::Table, StudyInvite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_invite_host_id")
                            .from(StudyInvite::Table, StudyInvite::HostId)
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
                    .name("idx_study_invite_user_id_active")
                    .table(StudyInvite::Table)
                    .col(StudyInvite::UserId)
                    .col(StudyInvite::Active)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyInvite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyInvite {
    Table,
    Id,
    UserId,
    HostId,
    RoomSlug,
    Active,
    CreatedAt,
}
