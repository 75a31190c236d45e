use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260308_000020_create_resource_table::Resource,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceVote::Table)
                    .if_not_exists()
                    .col(integer(ResourceVote::ResourceId))
                    .col(integer(ResourceVote::UserId))
                    .col(boolean(ResourceVote::Up))
                    .primary_key(
                        Index::create()
                            .col(ResourceVote::ResourceId)
                            .col(ResourceVote::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_vote_resource_id")
                            .from(ResourceVote::Table, ResourceVote::ResourceId)
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_vote_user_id")
                            .from(ResourceVote::Table, ResourceVote::UserId)
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
            .drop_table(Table::drop().table(ResourceVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResourceVote {
    Table,
    ResourceId,
    UserId,
    Up,
}
