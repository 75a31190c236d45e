use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
    m20260307_000017_create_review_table::Review,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReviewVote::Table)
                    .if_not_exists()
                    .col(integer(ReviewVote::ReviewId))
                    .col(integer(ReviewVote::UserId))
                    .col(boolean(ReviewVote::Agree))
                    .primary_key(
                        Index::create()
                            .col(ReviewVote::ReviewId)
                            .col(ReviewVote::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_vote_review_id")
                            .from(ReviewVote::Table, ReviewVote::ReviewId)
                            .to(Review::Table, Review::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_vote_user_id")
                            .from(ReviewVote::Table, ReviewVote::UserId)
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
            .drop_table(Table::drop().table(ReviewVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReviewVote {
    Table,
    ReviewId,
    UserId,
    Agree,
}
